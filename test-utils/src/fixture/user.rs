//! User fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating user entity models without database insertion.

use chrono::{NaiveDate, TimeZone, Utc};
use entity::user;

/// Default test username.
pub const DEFAULT_USERNAME: &str = "testuser";

/// Default test first name.
pub const DEFAULT_FIRST_NAME: &str = "Test";

/// Default test last name.
pub const DEFAULT_LAST_NAME: &str = "User";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - username: `"testuser"`
/// - first_name / last_name: `"Test"` / `"User"`
/// - birth_date: 1995-06-15
/// - every optional field: `None`
///
/// # Example
///
/// ```rust,ignore
/// let user = fixture::user::entity();
/// assert_eq!(user.username, "testuser");
/// ```
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let user = fixture::user::entity_builder()
///     .id(7)
///     .username("ana")
///     .bio(Some("Climber".to_string()))
///     .build();
/// ```
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    id: i32,
    username: String,
    first_name: String,
    last_name: String,
    second_last_name: Option<String>,
    birth_date: NaiveDate,
    bio: Option<String>,
    profile_image: Option<String>,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            username: DEFAULT_USERNAME.to_string(),
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
            second_last_name: None,
            birth_date: NaiveDate::from_ymd_opt(1995, 6, 15).unwrap(),
            bio: None,
            profile_image: None,
        }
    }
}

impl UserEntityBuilder {
    /// Sets the user ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the optional second last name.
    pub fn second_last_name(mut self, second_last_name: Option<String>) -> Self {
        self.second_last_name = second_last_name;
        self
    }

    /// Sets the biography.
    pub fn bio(mut self, bio: Option<String>) -> Self {
        self.bio = bio;
        self
    }

    /// Sets the profile image path.
    pub fn profile_image(mut self, profile_image: Option<String>) -> Self {
        self.profile_image = profile_image;
        self
    }

    /// Builds and returns the user entity model.
    pub fn build(self) -> user::Model {
        let timestamp = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        user::Model {
            id: self.id,
            username: self.username,
            password_hash: "hash".to_string(),
            first_name: self.first_name,
            last_name: self.last_name,
            second_last_name: self.second_last_name,
            birth_date: self.birth_date,
            bio: self.bio,
            profile_image: self.profile_image,
            instagram: None,
            facebook: None,
            x: None,
            youtube: None,
            tiktok: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}
