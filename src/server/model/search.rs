//! Global search domain models.

use std::str::FromStr;

use crate::{
    model::search::SearchResultsDto,
    server::{
        error::AppError,
        model::{event::EventSummary, user::User},
    },
};

/// Which result lists a global search fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchType {
    #[default]
    All,
    Users,
    Events,
}

impl SearchType {
    pub fn includes_users(self) -> bool {
        matches!(self, Self::All | Self::Users)
    }

    pub fn includes_events(self) -> bool {
        matches!(self, Self::All | Self::Events)
    }
}

impl FromStr for SearchType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "users" => Ok(Self::Users),
            "events" => Ok(Self::Events),
            other => Err(AppError::BadRequest(format!(
                "Invalid search type '{}', expected all, users or events",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub users: Vec<User>,
    pub events: Vec<EventSummary>,
}

impl SearchResults {
    pub fn into_dto(self) -> SearchResultsDto {
        SearchResultsDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            events: self.events.into_iter().map(EventSummary::into_dto).collect(),
        }
    }
}
