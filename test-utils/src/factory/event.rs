//! Event factory for creating test event entities.
//!
//! This module provides factory methods for creating event entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern and can link the created event
//! to one or more categories.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db, organizer.id)
///     .title("Sunday football")
///     .date(Utc::now().date_naive() + Duration::days(3))
///     .category(category.id)
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    organizer_id: i32,
    title: String,
    description: String,
    date: NaiveDate,
    time: NaiveTime,
    min_age: i32,
    max_age: i32,
    location: String,
    image: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    max_participants: i32,
    category_ids: Vec<i32>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Event {id}"` where id is auto-incremented
    /// - date: 7 days from today, time: 18:00
    /// - age range: 18 to 99
    /// - max_participants: 10
    /// - no categories
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `organizer_id` - ID of the user organizing the event
    pub fn new(db: &'a DatabaseConnection, organizer_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            organizer_id,
            title: format!("Event {}", id),
            description: "Test event description".to_string(),
            date: Utc::now().date_naive() + Duration::days(7),
            time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            min_age: 18,
            max_age: 99,
            location: "Central Park".to_string(),
            image: None,
            latitude: None,
            longitude: None,
            max_participants: 10,
            category_ids: Vec::new(),
        }
    }

    /// Sets the event title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the event description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the calendar date of the event.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the start time of the event.
    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = time;
        self
    }

    /// Sets the allowed age range.
    pub fn ages(mut self, min_age: i32, max_age: i32) -> Self {
        self.min_age = min_age;
        self.max_age = max_age;
        self
    }

    /// Sets the location text.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the image path.
    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    /// Sets the coordinates.
    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Sets the participant capacity.
    pub fn max_participants(mut self, max_participants: i32) -> Self {
        self.max_participants = max_participants;
        self
    }

    /// Links the event to a category. May be called more than once.
    pub fn category(mut self, category_id: i32) -> Self {
        self.category_ids.push(category_id);
        self
    }

    /// Builds and inserts the event and its category links into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        let event = entity::event::ActiveModel {
            organizer_id: ActiveValue::Set(self.organizer_id),
            title: ActiveValue::Set(self.title),
            date: ActiveValue::Set(self.date),
            time: ActiveValue::Set(self.time),
            description: ActiveValue::Set(self.description),
            min_age: ActiveValue::Set(self.min_age),
            max_age: ActiveValue::Set(self.max_age),
            location: ActiveValue::Set(self.location),
            image: ActiveValue::Set(self.image),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            max_participants: ActiveValue::Set(self.max_participants),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for category_id in self.category_ids {
            entity::event_category::ActiveModel {
                event_id: ActiveValue::Set(event.id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(event)
    }
}

/// Creates an upcoming event with default values and no categories.
pub async fn create_event(
    db: &DatabaseConnection,
    organizer_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, organizer_id).build().await
}

/// Creates an event dated `days_ago` days in the past.
pub async fn create_past_event(
    db: &DatabaseConnection,
    organizer_id: i32,
    days_ago: i64,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, organizer_id)
        .date(Utc::now().date_naive() - Duration::days(days_ago))
        .build()
        .await
}
