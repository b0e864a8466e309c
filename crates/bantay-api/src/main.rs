//! # bantay-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the compliance registry.
//! Binds to a configurable port (default 8000).

use bantay_api::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let config = AppConfig::from_env();

    // Initialize the record store. A failed connection or migration
    // aborts startup.
    let pool = bantay_api::db::init_pool(&config.database_url)
        .await
        .map_err(|e| {
            tracing::error!("Record store initialization failed: {e}");
            e
        })?;

    let state = bantay_api::AppState::new(pool);
    let app = bantay_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Bantay API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
