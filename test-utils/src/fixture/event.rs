//! Event fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating event entity models without database insertion.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use entity::event;

/// Default test event title.
pub const DEFAULT_TITLE: &str = "Test Event";

/// Default organizer ID.
pub const DEFAULT_ORGANIZER_ID: i32 = 1;

/// Default participant capacity.
pub const DEFAULT_MAX_PARTICIPANTS: i32 = 10;

/// Creates an event entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - organizer_id: `1`
/// - title: `"Test Event"`
/// - date / time: 2030-05-20 19:30
/// - age range: 18 to 99
/// - max_participants: `10`
pub fn entity() -> event::Model {
    entity_builder().build()
}

/// Creates an event entity builder for customization.
pub fn entity_builder() -> EventEntityBuilder {
    EventEntityBuilder::default()
}

/// Builder for creating customized event entity models.
pub struct EventEntityBuilder {
    id: i32,
    organizer_id: i32,
    title: String,
    date: NaiveDate,
    time: NaiveTime,
    image: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    max_participants: i32,
}

impl Default for EventEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            organizer_id: DEFAULT_ORGANIZER_ID,
            title: DEFAULT_TITLE.to_string(),
            date: NaiveDate::from_ymd_opt(2030, 5, 20).unwrap(),
            time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            image: None,
            latitude: None,
            longitude: None,
            max_participants: DEFAULT_MAX_PARTICIPANTS,
        }
    }
}

impl EventEntityBuilder {
    /// Sets the event ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the organizer ID.
    pub fn organizer_id(mut self, organizer_id: i32) -> Self {
        self.organizer_id = organizer_id;
        self
    }

    /// Sets the event title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the event date.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
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

    /// Builds and returns the event entity model.
    pub fn build(self) -> event::Model {
        let timestamp = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        event::Model {
            id: self.id,
            organizer_id: self.organizer_id,
            title: self.title,
            date: self.date,
            time: self.time,
            description: "Test event description".to_string(),
            min_age: 18,
            max_age: 99,
            location: "Central Park".to_string(),
            image: self.image,
            latitude: self.latitude,
            longitude: self.longitude,
            max_participants: self.max_participants,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}
