mod model;
mod server;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    tracing::info!("Database connected and migrations applied");

    let state = startup::build_state(&config, db).await?;
    let app = router::router(state, &config)?;

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Starting server on {} ({})", address, config.app_env);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(startup::shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}
