use crate::server::{
    config::Config,
    error::AppError,
    service::{token::TokenService, upload::UploadService},
    state::AppState,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the upload directory and returns the service writing into it.
///
/// # Returns
/// - `Ok(UploadService)` - Directory exists and is ready for writes
/// - `Err(AppError::UploadErr)` - Directory could not be created
pub async fn setup_uploads(config: &Config) -> Result<UploadService, AppError> {
    let uploads = UploadService::new(&config.upload_dir, config.upload_max_size);
    uploads.ensure_dir().await?;

    tracing::info!("Serving uploads from {}", config.upload_dir.display());

    Ok(uploads)
}

/// Builds the shared application state from configuration.
pub async fn build_state(
    config: &Config,
    db: sea_orm::DatabaseConnection,
) -> Result<AppState, AppError> {
    let tokens = TokenService::new(&config.jwt_secret, config.jwt_expires_in_days);
    let uploads = setup_uploads(config).await?;

    Ok(AppState::new(db, tokens, uploads, config.app_env.clone()))
}

/// Resolves once the process receives Ctrl-C or, on Unix, SIGTERM.
///
/// A handler that can't be installed is logged and that signal is ignored.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
