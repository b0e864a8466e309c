//! # Record Store
//!
//! SQLite persistence via SQLx. One module per entity kind, each exposing
//! free functions over a pool reference: insert, fetch-by-id,
//! fetch-by-filter-with-pagination, partial update, and (for tindahan)
//! deactivation. Rows are mapped through internal `*Row` structs whose
//! `into_record` conversions validate enum strings and embedded documents
//! on read. A corrupt stored value is a decode error, never a silent
//! default.
//!
//! Referential integrity (`inspections.tindahan_id`,
//! `violations.inspection_id`) is enforced here via SQLite foreign keys,
//! enabled on every connection.

pub mod inspections;
pub mod reports;
pub mod tindahan;
pub mod violations;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Embedded migrations, applied at pool initialization.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Initialize the connection pool and run migrations.
///
/// The database file is created if missing. Startup fails if the URL is
/// unusable; the store holds the system's only state.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    tracing::info!(url = database_url, "connected to record store");

    MIGRATOR.run(&pool).await?;
    tracing::info!("database migrations applied");

    Ok(pool)
}

/// Map a domain validation failure on a stored value to a decode error.
///
/// Used by `into_record` conversions when a persisted enum string or
/// metrics document no longer parses.
pub(crate) fn decode_err(err: bantay_core::ValidationError) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(err))
}

/// Build a single-connection in-memory pool with migrations applied.
///
/// In-memory SQLite databases are per-connection, so tests must not use
/// a multi-connection pool here.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid in-memory URL")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("in-memory pool");

    MIGRATOR.run(&pool).await.expect("migrations apply");
    pool
}
