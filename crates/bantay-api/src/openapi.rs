//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bantay API — Barangay Tindahan Compliance Registry",
        version = "0.1.0",
        description = "Record-keeping service for barangay officials to register \
            local tindahan, street hawkers, and peddlers and track their regulatory \
            compliance.\n\nProvides:\n- **Tindahan registration** CRUD with paginated \
            listing and soft delete\n- **Health probe** at `/health`\n- **Prometheus \
            metrics** at `/metrics`",
        license(name = "AGPL-3.0-or-later")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server"),
    ),
    paths(
        crate::routes::tindahan::create_tindahan,
        crate::routes::tindahan::list_tindahan,
        crate::routes::tindahan::get_tindahan,
        crate::routes::tindahan::update_tindahan,
        crate::routes::tindahan::deactivate_tindahan,
        crate::health,
    ),
    components(schemas(
        bantay_core::TindahanRecord,
        bantay_core::TindahanCreate,
        bantay_core::TindahanUpdate,
        bantay_core::BusinessType,
        bantay_core::ComplianceStatus,
        crate::routes::tindahan::DeactivateResponse,
        crate::routes::tindahan::ListParams,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::HealthResponse,
    )),
    tags(
        (name = "tindahan", description = "Business registration operations"),
        (name = "ops", description = "Liveness and observability"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_openapi))
}

/// GET /openapi.json — the assembled specification.
async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
