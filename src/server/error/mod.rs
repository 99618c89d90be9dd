//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod upload;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, upload::UploadError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden, 404 Not Found).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Image upload rejected or failed to persist.
    ///
    /// Delegates to `UploadError::into_response()`.
    #[error(transparent)]
    UploadErr(#[from] UploadError),

    /// Database operation error from SeaORM.
    ///
    /// Constraint violations are reported to the client (409 for unique keys,
    /// 400 for foreign keys); everything else is a 500 with details logged
    /// server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Malformed multipart request body.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),

    /// JSON body missing, not JSON, or not matching the expected shape.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Path parameter that doesn't parse, such as a non-numeric ID.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// Query string that doesn't deserialize.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// Request that isn't `multipart/form-data`.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    MultipartRejection(#[from] MultipartRejection),

    /// Filesystem or socket error.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with current state, such as joining a full event.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and an `ErrorDto` body.
/// Internal errors are logged with full details but return generic messages to avoid
/// information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, rejected extractors, `MultipartErr` and foreign
///   key violations
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `Conflict` and unique constraint violations
/// - 500 Internal Server Error - For all other error types
/// - Variable - For `AuthErr` and `UploadErr`, delegated to their own conversions
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::UploadErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            Self::MultipartErr(err) => {
                tracing::debug!("Rejected multipart body: {}", err);
                error_response(StatusCode::BAD_REQUEST, err.body_text())
            }
            Self::JsonRejection(err) => rejected(err.body_text()),
            Self::PathRejection(err) => rejected(err.body_text()),
            Self::QueryRejection(err) => rejected(err.body_text()),
            Self::MultipartRejection(err) => rejected(err.body_text()),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!("Unique constraint violation: {}", detail);
                    error_response(StatusCode::CONFLICT, "Record already exists")
                }
                Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                    tracing::debug!("Foreign key violation: {}", detail);
                    error_response(StatusCode::BAD_REQUEST, "Invalid reference")
                }
                _ => InternalServerError(err).into_response(),
            },
            Self::InternalError(msg) => InternalServerError(msg).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status and message.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorDto::new(message))).into_response()
}

fn rejected(reason: String) -> Response {
    tracing::debug!("Rejected request: {}", reason);
    error_response(StatusCode::BAD_REQUEST, reason)
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
