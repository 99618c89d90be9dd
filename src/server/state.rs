//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token service for signing and verifying session tokens
//! - Upload service for storing event and profile images
//! - Environment name reported by the health check

use sea_orm::DatabaseConnection;

use crate::server::service::{token::TokenService, upload::UploadService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds the derived signing keys
/// - `UploadService` holds the upload directory and size limit
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies the bearer tokens used by `AuthGuard`.
    pub tokens: TokenService,

    /// Stores uploaded images under the configured upload directory.
    pub uploads: UploadService,

    /// Deployment environment name, e.g. `development` or `production`.
    pub app_env: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service configured with the JWT secret and lifetime
    /// - `uploads` - Upload service configured with the upload directory
    /// - `app_env` - Environment name
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        uploads: UploadService,
        app_env: String,
    ) -> Self {
        Self {
            db,
            tokens,
            uploads,
            app_env,
        }
    }
}
