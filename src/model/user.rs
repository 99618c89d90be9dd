use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{category::CategoryDto, event::EventDto};

/// Public user fields. Never carries the password hash.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub second_last_name: Option<String>,
    pub birth_date: NaiveDate,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub x: Option<String>,
    pub youtube: Option<String>,
    pub tiktok: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserProfileDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub hobbies: Vec<CategoryDto>,
    pub organized_count: u64,
    pub participating_count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserEventsDto {
    pub organized: Vec<EventDto>,
    pub participating: Vec<EventDto>,
}

/// Multipart form accepted by the profile update endpoint.
///
/// Every field is optional; `hobbies` is either a JSON array (`[1,2]`) or a
/// comma separated list (`1,2`).
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct UpdateUserForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub second_last_name: Option<String>,
    pub bio: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub x: Option<String>,
    pub youtube: Option<String>,
    pub tiktok: Option<String>,
    pub hobbies: Option<String>,
    #[schema(format = Binary, value_type = Option<String>)]
    pub profile_image: Option<Vec<u8>>,
}
