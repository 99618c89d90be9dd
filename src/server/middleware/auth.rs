use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
};

pub enum Permission {
    /// Caller must be the user with this ID.
    ProfileOwner(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the request and checks every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all permissions
    /// - `Err(AuthError::MissingToken)` - No `Bearer` authorization header
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired or malformed subject
    /// - `Err(AuthError::StaleToken)` - User deleted since the token was issued
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_id = self.token_user_id()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::StaleToken(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::ProfileOwner(owner_id) => {
                    if user.id != *owner_id {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User attempted to edit profile of user {}", owner_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// ID named by the request's token, without checking that the user still exists.
    ///
    /// # Returns
    /// - `Ok(i32)` - Token is present and valid
    /// - `Err(AuthError::MissingToken)` - No `Bearer` authorization header
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired or malformed subject
    pub fn token_user_id(&self) -> Result<i32, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        Ok(self.tokens.verify(token)?.user_id()?)
    }

    /// ID of the caller when the request carries a valid token.
    ///
    /// Missing or invalid tokens yield `None` so public endpoints can proceed
    /// anonymously.
    pub fn viewer_id(&self) -> Option<i32> {
        let token = bearer_token(self.headers)?;

        match self.tokens.verify(token).and_then(|claims| claims.user_id()) {
            Ok(user_id) => Some(user_id),
            Err(e) => {
                tracing::debug!("Ignoring invalid optional token: {}", e);
                None
            }
        }
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
