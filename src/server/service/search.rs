use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, user::UserRepository},
    error::AppError,
    model::search::{SearchResults, SearchType},
};

/// Maximum number of users returned by a global search.
const USER_RESULT_LIMIT: u64 = 20;

pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    /// Creates a new SearchService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches users and upcoming events at once.
    ///
    /// A blank query returns empty lists without touching the database. `kind` selects
    /// which lists are filled; the other stays empty.
    pub async fn search(&self, query: &str, kind: SearchType) -> Result<SearchResults, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchResults::default());
        }

        let mut results = SearchResults::default();

        if kind.includes_users() {
            results.users = UserRepository::new(self.db)
                .search(query, USER_RESULT_LIMIT)
                .await?;
        }
        if kind.includes_events() {
            let today = Utc::now().date_naive();
            results.events = EventRepository::new(self.db)
                .search(today, Some(query), &[])
                .await?;
        }

        Ok(results)
    }
}
