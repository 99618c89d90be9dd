//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password hash stored by default for factory users.
///
/// Not a valid Argon2 hash; tests that log in should set a real hash through
/// [`UserFactory::password_hash`].
pub const DEFAULT_PASSWORD_HASH: &str = "not-a-real-hash";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("ana")
///     .first_name("Ana")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    second_last_name: Option<String>,
    birth_date: NaiveDate,
    bio: Option<String>,
    profile_image: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{id}"` where id is auto-incremented
    /// - first_name: `"First{id}"`, last_name: `"Last{id}"`
    /// - birth_date: 1995-06-15
    /// - every optional profile field: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user_{}", id),
            password_hash: DEFAULT_PASSWORD_HASH.to_string(),
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            second_last_name: None,
            birth_date: NaiveDate::from_ymd_opt(1995, 6, 15).unwrap(),
            bio: None,
            profile_image: None,
        }
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets the first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the optional second last name.
    pub fn second_last_name(mut self, second_last_name: Option<String>) -> Self {
        self.second_last_name = second_last_name;
        self
    }

    /// Sets the birth date.
    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = birth_date;
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

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            second_last_name: ActiveValue::Set(self.second_last_name),
            birth_date: ActiveValue::Set(self.birth_date),
            bio: ActiveValue::Set(self.bio),
            profile_image: ActiveValue::Set(self.profile_image),
            instagram: ActiveValue::Set(None),
            facebook: ActiveValue::Set(None),
            x: ActiveValue::Set(None),
            youtube: ActiveValue::Set(None),
            tiktok: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user(&db).await?;
/// ```
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific username.
pub async fn create_user_with_username(
    db: &DatabaseConnection,
    username: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).username(username).build().await
}
