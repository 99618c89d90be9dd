use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RegisterDto {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub second_last_name: Option<String>,
    pub birth_date: NaiveDate,
    pub bio: Option<String>,
    #[serde(default)]
    pub hobbies: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AuthDto {
    pub token: String,
    pub user: UserDto,
}
