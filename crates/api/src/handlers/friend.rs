//! Handlers for the `/friends` resource.
//!
//! A friendship owns at most one status; reusing a status id on another
//! friendship is a 409 from `uq_friends_status_id`.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::friend::{Friend, FriendInput};
use campus_db::repositories::FriendRepo;
use validator::Validate;

use super::{ensure_exists, ensure_matching_id, ensure_new};
use crate::error::{AppError, AppResult};
use crate::headers;
use crate::state::AppState;

const ENTITY_NAME: &str = "friend";
const BASE_PATH: &str = "/api/friends";

/// POST /api/friends
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<FriendInput>,
) -> AppResult<(StatusCode, HeaderMap, Json<Friend>)> {
    tracing::debug!(?input, "REST request to save Friend");
    input.validate().map_err(CoreError::from)?;
    ensure_new(input.id, ENTITY_NAME)?;

    let friend = FriendRepo::create(&state.pool, &input).await?;
    tracing::info!(id = friend.id, "Friend created");

    let headers = headers::entity_creation_alert(
        &state.config.client_app_name,
        ENTITY_NAME,
        BASE_PATH,
        friend.id,
    );
    Ok((StatusCode::CREATED, headers, Json(friend)))
}

/// PUT /api/friends/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<FriendInput>,
) -> AppResult<(HeaderMap, Json<Friend>)> {
    tracing::debug!(id, ?input, "REST request to update Friend");
    input.validate().map_err(CoreError::from)?;
    ensure_matching_id(input.id, id, ENTITY_NAME)?;
    ensure_exists(FriendRepo::exists(&state.pool, id).await?, ENTITY_NAME)?;

    let friend = FriendRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Friend", id }))?;

    let headers = headers::entity_update_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((headers, Json(friend)))
}

/// PATCH /api/friends/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<FriendInput>,
) -> AppResult<(HeaderMap, Json<Friend>)> {
    tracing::debug!(id, ?input, "REST request to partially update Friend");
    input.validate().map_err(CoreError::from)?;
    ensure_matching_id(input.id, id, ENTITY_NAME)?;
    ensure_exists(FriendRepo::exists(&state.pool, id).await?, ENTITY_NAME)?;

    let friend = FriendRepo::partial_update(&state.pool, id, input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Friend", id }))?;

    let headers = headers::entity_update_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((headers, Json(friend)))
}

/// GET /api/friends
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Friend>>> {
    tracing::debug!("REST request to get all Friends");
    let rows = FriendRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/friends/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Friend>> {
    tracing::debug!(id, "REST request to get Friend");
    let friend = FriendRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Friend", id }))?;
    Ok(Json(friend))
}

/// DELETE /api/friends/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, HeaderMap)> {
    tracing::debug!(id, "REST request to delete Friend");
    if !FriendRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Friend", id }));
    }
    tracing::info!(id, "Friend deleted");

    let headers = headers::entity_deletion_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((StatusCode::NO_CONTENT, headers))
}
