//! Handlers for the `/friend-statuses` resource.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::friend_status::{FriendStatus, FriendStatusInput};
use campus_db::repositories::FriendStatusRepo;
use validator::Validate;

use super::{ensure_exists, ensure_matching_id, ensure_new};
use crate::error::{AppError, AppResult};
use crate::headers;
use crate::state::AppState;

const ENTITY_NAME: &str = "friendStatus";
const BASE_PATH: &str = "/api/friend-statuses";

/// POST /api/friend-statuses
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<FriendStatusInput>,
) -> AppResult<(StatusCode, HeaderMap, Json<FriendStatus>)> {
    tracing::debug!(?input, "REST request to save FriendStatus");
    input.validate().map_err(CoreError::from)?;
    ensure_new(input.id, ENTITY_NAME)?;

    let status = FriendStatusRepo::create(&state.pool, &input).await?;
    tracing::info!(id = status.id, "FriendStatus created");

    let headers = headers::entity_creation_alert(
        &state.config.client_app_name,
        ENTITY_NAME,
        BASE_PATH,
        status.id,
    );
    Ok((StatusCode::CREATED, headers, Json(status)))
}

/// PUT /api/friend-statuses/{id}
///
/// Overwrites every field; fields absent from the body become null.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<FriendStatusInput>,
) -> AppResult<(HeaderMap, Json<FriendStatus>)> {
    tracing::debug!(id, ?input, "REST request to update FriendStatus");
    input.validate().map_err(CoreError::from)?;
    ensure_matching_id(input.id, id, ENTITY_NAME)?;
    ensure_exists(FriendStatusRepo::exists(&state.pool, id).await?, ENTITY_NAME)?;

    let status = FriendStatusRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "FriendStatus", id }))?;

    let headers = headers::entity_update_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((headers, Json(status)))
}

/// PATCH /api/friend-statuses/{id}
///
/// Only the fields present in the body are written.
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<FriendStatusInput>,
) -> AppResult<(HeaderMap, Json<FriendStatus>)> {
    tracing::debug!(id, ?input, "REST request to partially update FriendStatus");
    input.validate().map_err(CoreError::from)?;
    ensure_matching_id(input.id, id, ENTITY_NAME)?;
    ensure_exists(FriendStatusRepo::exists(&state.pool, id).await?, ENTITY_NAME)?;

    let status = FriendStatusRepo::partial_update(&state.pool, id, input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "FriendStatus", id }))?;

    let headers = headers::entity_update_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((headers, Json(status)))
}

/// GET /api/friend-statuses
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<FriendStatus>>> {
    tracing::debug!("REST request to get all FriendStatuses");
    let rows = FriendStatusRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/friend-statuses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FriendStatus>> {
    tracing::debug!(id, "REST request to get FriendStatus");
    let status = FriendStatusRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "FriendStatus", id }))?;
    Ok(Json(status))
}

/// DELETE /api/friend-statuses/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, HeaderMap)> {
    tracing::debug!(id, "REST request to delete FriendStatus");
    if !FriendStatusRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "FriendStatus", id }));
    }
    tracing::info!(id, "FriendStatus deleted");

    let headers = headers::entity_deletion_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((StatusCode::NO_CONTENT, headers))
}
