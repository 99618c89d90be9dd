use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authentication token provided")]
    MissingToken,

    /// Bearer token failed signature or expiry validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid or expired token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Login attempt with an unknown username or wrong password.
    ///
    /// Both cases share one message so usernames cannot be enumerated.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token is valid but the user it names no longer exists.
    ///
    /// Results in a 404 Not Found response. Returned when the caller asks for their own
    /// profile.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Token is valid but names a deleted user, so it can't authorize anything.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Token names deleted user {0}")]
    StaleToken(i32),

    /// User is authenticated but not allowed to perform the operation.
    ///
    /// The reason is logged; the client receives a generic 403 Forbidden.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Token could not be signed.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Failed to issue token: {0}")]
    TokenIssue(jsonwebtoken::errors::Error),

    /// Password hashing or verification failed for a reason other than a mismatch.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] argon2::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `StaleToken` / `InvalidCredentials` → 401 Unauthorized
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `AccessDenied` → 403 Forbidden
/// - `TokenIssue` / `PasswordHash` → 500 Internal Server Error
///
/// Token failures are logged at debug level for diagnostics while keeping client-facing
/// messages fixed.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => {
                error_response(StatusCode::UNAUTHORIZED, "No authentication token provided")
            }
            Self::InvalidToken(err) => {
                tracing::debug!("Rejected token: {}", err);
                error_response(StatusCode::UNAUTHORIZED, "Invalid or expired token")
            }
            Self::StaleToken(user_id) => {
                tracing::debug!("Rejected token for deleted user {}", user_id);
                error_response(StatusCode::UNAUTHORIZED, "Invalid or expired token")
            }
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, "Invalid credentials")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!("Token names missing user {}", user_id);
                error_response(StatusCode::NOT_FOUND, "User not found")
            }
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                error_response(
                    StatusCode::FORBIDDEN,
                    "You do not have permission to perform this action",
                )
            }
            err @ (Self::TokenIssue(_) | Self::PasswordHash(_)) => {
                InternalServerError(err).into_response()
            }
        }
    }
}
