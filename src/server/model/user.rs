//! User domain models and parameters.
//!
//! Provides the public user model, the profile aggregate returned by profile endpoints,
//! and parameter types for registration and profile updates.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::user::{UserDto, UserEventsDto, UserProfileDto},
    server::{
        error::AppError,
        model::{auth::non_blank, category::Category, event::EventSummary},
        util::{multipart::FormData, parse::parse_hobbies},
    },
};

/// Registered user without credentials.
///
/// The password hash never leaves the repository except through
/// `UserRepository::find_credentials`.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
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

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            second_last_name: self.second_last_name,
            birth_date: self.birth_date,
            bio: self.bio,
            profile_image: self.profile_image,
            instagram: self.instagram,
            facebook: self.facebook,
            x: self.x,
            youtube: self.youtube,
            tiktok: self.tiktok,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// Drops the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            first_name: entity.first_name,
            last_name: entity.last_name,
            second_last_name: entity.second_last_name,
            birth_date: entity.birth_date,
            bio: entity.bio,
            profile_image: entity.profile_image,
            instagram: entity.instagram,
            facebook: entity.facebook,
            x: entity.x,
            youtube: entity.youtube,
            tiktok: entity.tiktok,
            created_at: entity.created_at,
        }
    }
}

/// Joins name parts, skipping an absent or blank second last name.
pub fn full_name(first: &str, last: &str, second_last: Option<&str>) -> String {
    match second_last.map(str::trim).filter(|s| !s.is_empty()) {
        Some(second) => format!("{} {} {}", first, last, second),
        None => format!("{} {}", first, last),
    }
}

/// A user together with the hash needed to check a login attempt.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Public profile: the user, their hobbies and activity counters.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: User,
    pub hobbies: Vec<Category>,
    /// Number of events the user organizes.
    pub organized_count: u64,
    /// Number of events the user has joined.
    pub participating_count: u64,
}

impl UserProfile {
    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            user: self.user.into_dto(),
            hobbies: self.hobbies.into_iter().map(Category::into_dto).collect(),
            organized_count: self.organized_count,
            participating_count: self.participating_count,
        }
    }
}

/// Parameters for inserting a new user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub second_last_name: Option<String>,
    pub birth_date: NaiveDate,
    pub bio: Option<String>,
    /// Hobby category IDs stored with the account.
    pub hobbies: Vec<i32>,
}

/// Partial profile update.
///
/// `None` leaves a field untouched. For nullable columns the inner `Option` is the new
/// value, so `Some(None)` clears the column.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub second_last_name: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub profile_image: Option<Option<String>>,
    pub instagram: Option<Option<String>>,
    pub facebook: Option<Option<String>>,
    pub x: Option<Option<String>>,
    pub youtube: Option<Option<String>>,
    pub tiktok: Option<Option<String>>,
    /// Replaces the whole hobby set when present.
    pub hobbies: Option<Vec<i32>>,
}

impl UpdateUserParams {
    /// Reads the text fields of a profile update form.
    ///
    /// Absent fields stay `None`. Present nullable fields are trimmed and a blank value
    /// clears the column. The profile image is stored separately and assigned afterwards.
    ///
    /// # Returns
    /// - `Ok(UpdateUserParams)` - Parsed update
    /// - `Err(AppError::BadRequest)` - Blank first/last name or malformed hobbies
    pub fn from_form(form: &FormData) -> Result<Self, AppError> {
        let required_name = |field: &str| -> Result<Option<String>, AppError> {
            match form.text(field).map(str::trim) {
                None => Ok(None),
                Some("") => Err(AppError::BadRequest(format!("{} cannot be empty", field))),
                Some(value) => Ok(Some(value.to_string())),
            }
        };
        let nullable = |field: &str| form.text(field).map(|v| non_blank(Some(v.to_string())));

        Ok(Self {
            first_name: required_name("first_name")?,
            last_name: required_name("last_name")?,
            second_last_name: nullable("second_last_name"),
            bio: nullable("bio"),
            profile_image: None,
            instagram: nullable("instagram"),
            facebook: nullable("facebook"),
            x: nullable("x"),
            youtube: nullable("youtube"),
            tiktok: nullable("tiktok"),
            hobbies: form.text("hobbies").map(parse_hobbies).transpose()?,
        })
    }
}

/// Both per-user event lists.
#[derive(Debug, Clone, Default)]
pub struct UserEvents {
    pub organized: Vec<EventSummary>,
    pub participating: Vec<EventSummary>,
}

impl UserEvents {
    pub fn into_dto(self) -> UserEventsDto {
        UserEventsDto {
            organized: self
                .organized
                .into_iter()
                .map(EventSummary::into_dto)
                .collect(),
            participating: self
                .participating
                .into_iter()
                .map(EventSummary::into_dto)
                .collect(),
        }
    }
}
