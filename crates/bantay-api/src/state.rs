//! # Application State & Configuration
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor. The record store is the database: there
//! is no in-process cache; every request re-fetches fresh state through
//! the pool.

use sqlx::SqlitePool;

/// Service configuration, built from environment variables in `main`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port to bind.
    pub port: u16,
    /// SQLx connection URL for the record store.
    pub database_url: String,
}

impl AppConfig {
    /// Build configuration from the environment.
    ///
    /// `PORT` defaults to 8000; `DATABASE_URL` defaults to a local
    /// SQLite file next to the binary.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://bantay.db".to_string());

        Self { port, database_url }
    }
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Record store connection pool.
    pub db: SqlitePool,
}

impl AppState {
    /// Create application state over an initialized pool.
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}
