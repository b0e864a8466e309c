//! # bantay-api — Axum API Service for the Bantay Compliance Registry
//!
//! HTTP service for barangay tindahan compliance record-keeping. Routes
//! delegate to the record store in [`db`]; entity schemas and validation
//! live in `bantay-core`.
//!
//! ## API Surface
//!
//! | Prefix | Module | Domain |
//! |--------|--------|--------|
//! | `/tindahan` | [`routes::tindahan`] | Business registrations |
//! | `/health` | [`health`] | Liveness probe |
//! | `/metrics` | [`middleware::metrics`] | Prometheus exposition |
//! | `/openapi.json` | [`openapi`] | OpenAPI spec |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! CorsLayer → TraceLayer → MetricsMiddleware → Handler
//! ```

pub mod db;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::ToSchema;

use crate::middleware::metrics::ApiMetrics;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let metrics = ApiMetrics::new();

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(middleware::metrics::metrics_handler))
        .merge(routes::tindahan::router())
        .merge(openapi::router())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        // Browser dashboards call this API cross-origin during pilots.
        .layer(CorsLayer::permissive())
        .layer(Extension(metrics))
        .with_state(state)
}

/// Health probe response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Fixed "healthy" marker.
    pub status: String,
    /// Human-readable service description.
    pub message: String,
}

/// GET /health — liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is running", body = HealthResponse)),
    tag = "ops"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Bantay compliance registry is running".to_string(),
    })
}
