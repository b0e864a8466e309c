//! # Tindahan Registration API
//!
//! REST endpoints for business registrations:
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `POST` | `/tindahan` | `create_tindahan` |
//! | `GET` | `/tindahan` | `list_tindahan` |
//! | `GET` | `/tindahan/:id` | `get_tindahan` |
//! | `PUT` | `/tindahan/:id` | `update_tindahan` |
//! | `DELETE` | `/tindahan/:id` | `deactivate_tindahan` |
//!
//! Deletion is always a soft delete: the registration's active flag is
//! cleared and the row stays in the store.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use bantay_core::{TindahanCreate, TindahanRecord, TindahanUpdate};

use crate::db;
use crate::error::AppError;
use crate::extractors::extract_validated_json;
use crate::state::AppState;

/// Pagination and filter parameters for the listing endpoint.
#[derive(Debug, Deserialize, Default, ToSchema)]
pub struct ListParams {
    /// Records to skip (default: 0).
    pub skip: Option<i64>,
    /// Maximum records to return (default: 100, max: 1000).
    pub limit: Option<i64>,
    /// Exclude deactivated registrations (default: true).
    pub active_only: Option<bool>,
}

impl ListParams {
    const DEFAULT_LIMIT: i64 = 100;
    const MAX_LIMIT: i64 = 1000;

    fn effective_skip(&self) -> i64 {
        self.skip.unwrap_or(0).max(0)
    }

    fn effective_limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }

    fn effective_active_only(&self) -> bool {
        self.active_only.unwrap_or(true)
    }
}

/// Confirmation body returned by the soft-delete endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeactivateResponse {
    /// Human-readable confirmation.
    pub message: String,
}

/// Build the tindahan router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tindahan", get(list_tindahan).post(create_tindahan))
        .route(
            "/tindahan/:id",
            get(get_tindahan)
                .put(update_tindahan)
                .delete(deactivate_tindahan),
        )
}

/// POST /tindahan — Register a new tindahan.
#[utoipa::path(
    post,
    path = "/tindahan",
    request_body = TindahanCreate,
    responses(
        (status = 200, description = "Registration stored", body = TindahanRecord),
        (status = 400, description = "Malformed body", body = crate::error::ErrorBody),
        (status = 422, description = "Validation failure", body = crate::error::ErrorBody),
    ),
    tag = "tindahan"
)]
pub async fn create_tindahan(
    State(state): State<AppState>,
    body: Result<Json<TindahanCreate>, JsonRejection>,
) -> Result<Json<TindahanRecord>, AppError> {
    let create = extract_validated_json(body)?;
    let record = db::tindahan::insert(&state.db, &create).await?;
    tracing::info!(id = record.id, name = %record.business_name, "tindahan registered");
    Ok(Json(record))
}

/// GET /tindahan — List registrations with pagination.
#[utoipa::path(
    get,
    path = "/tindahan",
    params(
        ("skip" = Option<i64>, Query, description = "Records to skip (default 0)"),
        ("limit" = Option<i64>, Query, description = "Max records to return (default 100, max 1000)"),
        ("active_only" = Option<bool>, Query, description = "Exclude deactivated registrations (default true)"),
    ),
    responses(
        (status = 200, description = "Page of registrations", body = Vec<TindahanRecord>),
    ),
    tag = "tindahan"
)]
pub async fn list_tindahan(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TindahanRecord>>, AppError> {
    let records = db::tindahan::list(
        &state.db,
        params.effective_skip(),
        params.effective_limit(),
        params.effective_active_only(),
    )
    .await?;
    Ok(Json(records))
}

/// GET /tindahan/:id — Fetch one registration.
#[utoipa::path(
    get,
    path = "/tindahan/{id}",
    params(("id" = i64, Path, description = "Registration id")),
    responses(
        (status = 200, description = "Registration found", body = TindahanRecord),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
    ),
    tag = "tindahan"
)]
pub async fn get_tindahan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TindahanRecord>, AppError> {
    db::tindahan::get_by_id(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Tindahan not found".to_string()))
}

/// PUT /tindahan/:id — Apply a partial update.
///
/// Only fields present in the body change; the update timestamp is
/// refreshed even when the body is empty.
#[utoipa::path(
    put,
    path = "/tindahan/{id}",
    params(("id" = i64, Path, description = "Registration id")),
    request_body = TindahanUpdate,
    responses(
        (status = 200, description = "Updated registration", body = TindahanRecord),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
        (status = 422, description = "Validation failure", body = crate::error::ErrorBody),
    ),
    tag = "tindahan"
)]
pub async fn update_tindahan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<TindahanUpdate>, JsonRejection>,
) -> Result<Json<TindahanRecord>, AppError> {
    let changes = extract_validated_json(body)?;
    db::tindahan::update(&state.db, id, &changes)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Tindahan not found".to_string()))
}

/// DELETE /tindahan/:id — Deactivate a registration (soft delete).
#[utoipa::path(
    delete,
    path = "/tindahan/{id}",
    params(("id" = i64, Path, description = "Registration id")),
    responses(
        (status = 200, description = "Registration deactivated", body = DeactivateResponse),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
    ),
    tag = "tindahan"
)]
pub async fn deactivate_tindahan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeactivateResponse>, AppError> {
    if !db::tindahan::deactivate(&state.db, id).await? {
        return Err(AppError::NotFound("Tindahan not found".to_string()));
    }
    tracing::info!(id, "tindahan deactivated");
    Ok(Json(DeactivateResponse {
        message: "Tindahan deactivated successfully".to_string(),
    }))
}
