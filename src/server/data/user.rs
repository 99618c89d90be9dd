//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, credential lookup, profile updates and name search with
//! conversion between entity models and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::hobby::{insert_hobbies, replace_hobbies},
    model::user::{CreateUserParams, UpdateUserParams, User, UserCredentials},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user account with its hobbies.
    ///
    /// The user row and hobby links are written in one transaction; if any hobby insert
    /// fails no account is created.
    ///
    /// # Arguments
    /// - `params` - Account fields including the already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `username` or a
    ///   foreign key violation for an unknown hobby category
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            password_hash: ActiveValue::Set(params.password_hash),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            second_last_name: ActiveValue::Set(params.second_last_name),
            birth_date: ActiveValue::Set(params.birth_date),
            bio: ActiveValue::Set(params.bio),
            profile_image: ActiveValue::Set(None),
            instagram: ActiveValue::Set(None),
            facebook: ActiveValue::Set(None),
            x: ActiveValue::Set(None),
            youtube: ActiveValue::Set(None),
            tiktok: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_hobbies(&txn, entity.id, &params.hobbies).await?;
        txn.commit().await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their password hash by username for login.
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - User found
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials(&self, username: &str) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(|entity| {
            let password_hash = entity.password_hash.clone();
            UserCredentials {
                user: User::from_entity(entity),
                password_hash,
            }
        }))
    }

    /// Checks whether a username is already taken.
    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Searches users by username or name.
    ///
    /// The term is split on whitespace and every word must appear in the username,
    /// first name, last name or second last name, so "ana lopez" matches a user named
    /// Ana Lopez. Matching uses SQL `LIKE`, which is case-insensitive for ASCII on SQLite.
    ///
    /// # Arguments
    /// - `term` - Non-blank search text
    /// - `limit` - Maximum number of users to return
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Matching users ordered by username
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, term: &str, limit: u64) -> Result<Vec<User>, DbErr> {
        let mut condition = Condition::all();
        for word in term.split_whitespace() {
            condition = condition.add(
                Condition::any()
                    .add(entity::user::Column::Username.contains(word))
                    .add(entity::user::Column::FirstName.contains(word))
                    .add(entity::user::Column::LastName.contains(word))
                    .add(entity::user::Column::SecondLastName.contains(word)),
            );
        }

        let entities = entity::prelude::User::find()
            .filter(condition)
            .order_by_asc(entity::user::Column::Username)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Applies a partial profile update.
    ///
    /// Only fields present in `params` change; `updated_at` is always refreshed. When
    /// `hobbies` is present the whole hobby set is replaced. Row and hobbies are written
    /// in one transaction, so a failed hobby insert leaves the profile untouched.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::User::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();

        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(second_last_name) = params.second_last_name {
            active.second_last_name = ActiveValue::Set(second_last_name);
        }
        if let Some(bio) = params.bio {
            active.bio = ActiveValue::Set(bio);
        }
        if let Some(profile_image) = params.profile_image {
            active.profile_image = ActiveValue::Set(profile_image);
        }
        if let Some(instagram) = params.instagram {
            active.instagram = ActiveValue::Set(instagram);
        }
        if let Some(facebook) = params.facebook {
            active.facebook = ActiveValue::Set(facebook);
        }
        if let Some(x) = params.x {
            active.x = ActiveValue::Set(x);
        }
        if let Some(youtube) = params.youtube {
            active.youtube = ActiveValue::Set(youtube);
        }
        if let Some(tiktok) = params.tiktok {
            active.tiktok = ActiveValue::Set(tiktok);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(&txn).await?;

        if let Some(hobbies) = params.hobbies {
            replace_hobbies(&txn, id, &hobbies).await?;
        }
        txn.commit().await?;

        Ok(Some(User::from_entity(updated)))
    }
}
