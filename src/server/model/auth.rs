//! Authentication domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::auth::{AuthDto, RegisterDto},
    server::{error::AppError, model::user::User},
};

/// Validated registration request.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub second_last_name: Option<String>,
    pub birth_date: NaiveDate,
    pub bio: Option<String>,
    pub hobbies: Vec<i32>,
}

impl RegisterParams {
    /// Converts and validates the registration DTO.
    ///
    /// Username, password, first name and last name must be non-blank. Username and
    /// names are trimmed; optional text fields that are blank become `None`.
    ///
    /// # Returns
    /// - `Ok(RegisterParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - A required field is blank
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let username = dto.username.trim().to_string();
        let first_name = dto.first_name.trim().to_string();
        let last_name = dto.last_name.trim().to_string();

        if username.is_empty() || dto.password.is_empty() {
            return Err(AppError::BadRequest(
                "Username and password are required".to_string(),
            ));
        }
        if first_name.is_empty() || last_name.is_empty() {
            return Err(AppError::BadRequest(
                "First name and last name are required".to_string(),
            ));
        }

        Ok(Self {
            username,
            password: dto.password,
            first_name,
            last_name,
            second_last_name: non_blank(dto.second_last_name),
            birth_date: dto.birth_date,
            bio: non_blank(dto.bio),
            hobbies: dto.hobbies,
        })
    }
}

/// Trims an optional string, mapping blank values to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Issued token plus the user it belongs to.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

impl AuthSession {
    pub fn into_dto(self) -> AuthDto {
        AuthDto {
            token: self.token,
            user: self.user.into_dto(),
        }
    }
}
