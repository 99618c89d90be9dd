use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventDto {
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
    pub organizer_id: i32,
    pub organizer_username: String,
    pub organizer_name: String,
    pub organizer_image: Option<String>,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
    pub category_color: Option<String>,
    pub participant_count: u64,
    pub like_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_participant: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liked_by_user: Option<bool>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ParticipantDto {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image: Option<String>,
    pub joined_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct EventDetailDto {
    #[serde(flatten)]
    pub event: EventDto,
    pub participants: Vec<ParticipantDto>,
}

/// Multipart form accepted by the event creation endpoint.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct CreateEventForm {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`
    pub time: String,
    pub min_age: i32,
    pub max_age: i32,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub max_participants: i32,
    pub category_id: i32,
    #[schema(format = Binary, value_type = Option<String>)]
    pub image: Option<Vec<u8>>,
}
