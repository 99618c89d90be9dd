//! Event domain models and parameters.
//!
//! An `EventSummary` is an event row enriched with its organizer, its category, and
//! participation/like counters. Lists and detail views are both built from it.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::{
    model::event::{EventDetailDto, EventDto, ParticipantDto},
    server::{
        error::AppError,
        model::category::Category,
        util::{
            multipart::FormData,
            parse::{parse_coordinate, parse_date, parse_i32, parse_time},
        },
    },
};

const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

/// Organizer fields embedded in every event summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Organizer {
    pub id: i32,
    pub username: String,
    /// Display name in `first last [second]` form.
    pub full_name: String,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventSummary {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub min_age: i32,
    pub max_age: i32,
    pub location: String,
    pub image: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub max_participants: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub organizer: Organizer,
    /// First linked category, if the event is categorized.
    pub category: Option<Category>,
    pub participant_count: u64,
    pub like_count: u64,
    /// Whether the viewing user joined the event. `None` for anonymous views.
    pub is_participant: Option<bool>,
    /// Whether the viewing user liked the event. `None` for anonymous views.
    pub liked_by_user: Option<bool>,
}

impl EventSummary {
    /// Builds a summary from an event row and its already loaded relations.
    pub fn from_entity(
        entity: entity::event::Model,
        organizer: Organizer,
        category: Option<Category>,
        participant_count: u64,
        like_count: u64,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            date: entity.date,
            time: entity.time,
            min_age: entity.min_age,
            max_age: entity.max_age,
            location: entity.location,
            image: entity.image,
            latitude: entity.latitude,
            longitude: entity.longitude,
            max_participants: entity.max_participants,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            organizer,
            category,
            participant_count,
            like_count,
            is_participant: None,
            liked_by_user: None,
        }
    }

    /// Popularity score used to rank upcoming events.
    pub fn popularity(&self) -> u64 {
        self.participant_count + self.like_count
    }

    pub fn into_dto(self) -> EventDto {
        let (category_id, category_name, category_color) = match self.category {
            Some(category) => (Some(category.id), Some(category.name), Some(category.color)),
            None => (None, None, None),
        };

        EventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            date: self.date,
            time: self.time,
            min_age: self.min_age,
            max_age: self.max_age,
            location: self.location,
            image: self.image,
            latitude: self.latitude,
            longitude: self.longitude,
            max_participants: self.max_participants,
            created_at: self.created_at,
            updated_at: self.updated_at,
            organizer_id: self.organizer.id,
            organizer_username: self.organizer.username,
            organizer_name: self.organizer.full_name,
            organizer_image: self.organizer.profile_image,
            category_id,
            category_name,
            category_color,
            participant_count: self.participant_count,
            like_count: self.like_count,
            is_participant: self.is_participant,
            liked_by_user: self.liked_by_user,
        }
    }
}

/// A user who joined an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image: Option<String>,
    pub joined_at: DateTime<Utc>,
}

impl Participant {
    pub fn from_entity(
        participation: entity::event_participant::Model,
        user: entity::user::Model,
    ) -> Self {
        Self {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            profile_image: user.profile_image,
            joined_at: participation.created_at,
        }
    }

    pub fn into_dto(self) -> ParticipantDto {
        ParticipantDto {
            id: self.id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            profile_image: self.profile_image,
            joined_at: self.joined_at,
        }
    }
}

/// Event summary plus the participant list.
#[derive(Debug, Clone)]
pub struct EventDetail {
    pub summary: EventSummary,
    pub participants: Vec<Participant>,
}

impl EventDetail {
    pub fn into_dto(self) -> EventDetailDto {
        EventDetailDto {
            event: self.summary.into_dto(),
            participants: self
                .participants
                .into_iter()
                .map(Participant::into_dto)
                .collect(),
        }
    }
}

/// Validated parameters for creating an event.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub organizer_id: i32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub min_age: i32,
    pub max_age: i32,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub max_participants: i32,
    pub category_id: i32,
    /// Public path of the stored image, set after the upload is saved.
    pub image: Option<String>,
}

impl CreateEventParams {
    /// Converts and validates the text fields of an event creation form.
    ///
    /// The image file, if any, is stored separately and assigned to `image` afterwards.
    ///
    /// # Returns
    /// - `Ok(CreateEventParams)` - Validated parameters with `image: None`
    /// - `Err(AppError::BadRequest)` - A field is missing, malformed, or out of range
    pub fn from_form(organizer_id: i32, form: &FormData) -> Result<Self, AppError> {
        let title = form.required("title")?.trim().to_string();
        let location = form.required("location")?.trim().to_string();
        let description = form.text("description").unwrap_or_default().to_string();

        if title.is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }
        if location.is_empty() {
            return Err(AppError::BadRequest("Location is required".to_string()));
        }

        let min_age = parse_i32("min_age", form.required("min_age")?)?;
        let max_age = parse_i32("max_age", form.required("max_age")?)?;
        if min_age < 0 || max_age < 0 {
            return Err(AppError::BadRequest("Ages cannot be negative".to_string()));
        }
        if min_age > max_age {
            return Err(AppError::BadRequest(
                "min_age cannot be greater than max_age".to_string(),
            ));
        }

        let max_participants =
            parse_i32("max_participants", form.required("max_participants")?)?;
        if max_participants < 1 {
            return Err(AppError::BadRequest(
                "max_participants must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            organizer_id,
            title,
            description,
            date: parse_date("date", form.required("date")?)?,
            time: parse_time("time", form.required("time")?)?,
            min_age,
            max_age,
            location,
            latitude: parse_coordinate("latitude", form.text("latitude"), MAX_LATITUDE)?,
            longitude: parse_coordinate("longitude", form.text("longitude"), MAX_LONGITUDE)?,
            max_participants,
            category_id: parse_i32("category_id", form.required("category_id")?)?,
            image: None,
        })
    }
}
