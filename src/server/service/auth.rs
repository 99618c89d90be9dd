use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::{AuthSession, RegisterParams},
        user::{CreateUserParams, UserProfile},
    },
    service::{category::CategoryService, token::TokenService, user::UserService},
    util::password::{hash_password, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `tokens` - Token service used to issue session tokens
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new user and signs them in.
    ///
    /// Rejects taken usernames and unknown hobby categories before hashing. Hobbies are
    /// inserted ignoring duplicates.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Created user with a fresh token
    /// - `Err(AppError::Conflict)` - Username already taken
    /// - `Err(AppError::BadRequest)` - Unknown hobby category
    /// - `Err(AppError::AuthErr)` - Hashing or signing failed
    pub async fn register(&self, params: RegisterParams) -> Result<AuthSession, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.username_exists(&params.username).await? {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }
        CategoryService::new(self.db)
            .ensure_exist(&params.hobbies)
            .await?;

        let password_hash = hash(params.password).await?;

        let user = user_repo
            .create(CreateUserParams {
                username: params.username,
                password_hash,
                first_name: params.first_name,
                last_name: params.last_name,
                second_last_name: params.second_last_name,
                birth_date: params.birth_date,
                bio: params.bio,
                hobbies: params.hobbies,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.username, user.id);

        let token = self.tokens.issue(&user)?;

        Ok(AuthSession { token, user })
    }

    /// Checks credentials and issues a token.
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Valid credentials
    /// - `Err(AppError::BadRequest)` - Blank username or password
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user or wrong password
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthSession, AppError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Username and password are required".to_string(),
            ));
        }

        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials(username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify(password.to_string(), credentials.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&credentials.user)?;

        Ok(AuthSession {
            token,
            user: credentials.user,
        })
    }

    /// Gets the profile of the authenticated user.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - Profile with hobbies and counters
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - User deleted since the token was issued
    pub async fn me(&self, user_id: i32) -> Result<UserProfile, AppError> {
        UserService::new(self.db)
            .find_profile(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }
}

/// Runs Argon2 hashing on the blocking thread pool.
async fn hash(password: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))??;

    Ok(hash)
}

async fn verify(password: String, encoded: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &encoded))
        .await
        .map_err(|e| AppError::InternalError(format!("Password verification task failed: {}", e)))
}
