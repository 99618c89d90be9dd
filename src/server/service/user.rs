use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        event::EventRepository, hobby::HobbyRepository, participation::ParticipationRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        event::EventSummary,
        user::{UpdateUserParams, User, UserEvents, UserProfile},
    },
    service::{category::CategoryService, upload::UploadService},
    util::multipart::UploadedFile,
};

/// Maximum number of users returned by the user search.
pub const USER_SEARCH_LIMIT: u64 = 20;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches users by username or name.
    ///
    /// A blank or missing term returns an empty list.
    pub async fn search(&self, term: Option<&str>) -> Result<Vec<User>, AppError> {
        let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(Vec::new());
        };

        Ok(UserRepository::new(self.db)
            .search(term, USER_SEARCH_LIMIT)
            .await?)
    }

    /// Builds a user's profile if the user exists.
    pub async fn find_profile(&self, id: i32) -> Result<Option<UserProfile>, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let hobbies = HobbyRepository::new(self.db).get_for_user(id).await?;
        let organized_count = EventRepository::new(self.db)
            .count_organized_by(id)
            .await?;
        let participating_count = ParticipationRepository::new(self.db)
            .count_for_user(id)
            .await?;

        Ok(Some(UserProfile {
            user,
            hobbies,
            organized_count,
            participating_count,
        }))
    }

    /// Gets a user's profile.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - User found
    /// - `Err(AppError::NotFound)` - No user with this ID
    pub async fn get_profile(&self, id: i32) -> Result<UserProfile, AppError> {
        self.find_profile(id).await?.ok_or_else(user_not_found)
    }

    /// Applies a partial profile update.
    ///
    /// Hobbies, when present, replace the whole hobby set after every ID is checked. A new
    /// profile image is stored before the row is updated and deleted again if the update
    /// fails. Ownership is checked by the caller.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - Updated profile
    /// - `Err(AppError::BadRequest)` - Unknown hobby category
    /// - `Err(AppError::UploadErr)` - Image rejected or not stored
    /// - `Err(AppError::NotFound)` - No user with this ID
    pub async fn update(
        &self,
        id: i32,
        mut params: UpdateUserParams,
        image: Option<UploadedFile>,
        uploads: &UploadService,
    ) -> Result<UserProfile, AppError> {
        if let Some(hobbies) = &params.hobbies {
            CategoryService::new(self.db).ensure_exist(hobbies).await?;
        }

        let stored_image = match image {
            Some(image) => Some(uploads.save(image).await?),
            None => None,
        };
        if let Some(path) = &stored_image {
            params.profile_image = Some(Some(path.clone()));
        }

        let result = UserRepository::new(self.db)
            .update(id, params)
            .await
            .map_err(AppError::from)
            .and_then(|user| user.ok_or_else(user_not_found));
        if result.is_err() {
            if let Some(path) = &stored_image {
                uploads.discard(path).await;
            }
        }
        result?;

        tracing::debug!("Updated profile of user {}", id);

        self.get_profile(id).await
    }

    /// Events organized by the user, latest date first.
    pub async fn organized(&self, id: i32) -> Result<Vec<EventSummary>, AppError> {
        Ok(EventRepository::new(self.db).get_organized_by(id).await?)
    }

    /// Events the user joined, latest date first.
    pub async fn participating(&self, id: i32) -> Result<Vec<EventSummary>, AppError> {
        Ok(EventRepository::new(self.db).get_participating(id).await?)
    }

    /// Events the user liked, most recently liked first.
    pub async fn liked(&self, id: i32) -> Result<Vec<EventSummary>, AppError> {
        Ok(EventRepository::new(self.db).get_liked_by(id).await?)
    }

    /// Organized and participating lists together.
    pub async fn events(&self, id: i32) -> Result<UserEvents, AppError> {
        Ok(UserEvents {
            organized: self.organized(id).await?,
            participating: self.participating(id).await?,
        })
    }
}

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}
