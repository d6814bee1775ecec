//! Handlers for the `/user-configs` resource. One config per user.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::user_config::{UserConfig, UserConfigInput};
use campus_db::repositories::UserConfigRepo;
use validator::Validate;

use super::{ensure_exists, ensure_matching_id, ensure_new};
use crate::error::{AppError, AppResult};
use crate::headers;
use crate::state::AppState;

const ENTITY_NAME: &str = "userConfig";
const BASE_PATH: &str = "/api/user-configs";

/// POST /api/user-configs
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<UserConfigInput>,
) -> AppResult<(StatusCode, HeaderMap, Json<UserConfig>)> {
    tracing::debug!(?input, "REST request to save UserConfig");
    input.validate().map_err(CoreError::from)?;
    ensure_new(input.id, ENTITY_NAME)?;

    let config = UserConfigRepo::create(&state.pool, &input).await?;
    tracing::info!(id = config.id, "UserConfig created");

    let headers = headers::entity_creation_alert(
        &state.config.client_app_name,
        ENTITY_NAME,
        BASE_PATH,
        config.id,
    );
    Ok((StatusCode::CREATED, headers, Json(config)))
}

/// PUT /api/user-configs/{id}
///
/// Overwrites every field; fields absent from the body become null.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UserConfigInput>,
) -> AppResult<(HeaderMap, Json<UserConfig>)> {
    tracing::debug!(id, ?input, "REST request to update UserConfig");
    input.validate().map_err(CoreError::from)?;
    ensure_matching_id(input.id, id, ENTITY_NAME)?;
    ensure_exists(UserConfigRepo::exists(&state.pool, id).await?, ENTITY_NAME)?;

    let config = UserConfigRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "UserConfig", id }))?;

    let headers = headers::entity_update_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((headers, Json(config)))
}

/// PATCH /api/user-configs/{id}
///
/// Only the fields present in the body are written.
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UserConfigInput>,
) -> AppResult<(HeaderMap, Json<UserConfig>)> {
    tracing::debug!(id, ?input, "REST request to partially update UserConfig");
    input.validate().map_err(CoreError::from)?;
    ensure_matching_id(input.id, id, ENTITY_NAME)?;
    ensure_exists(UserConfigRepo::exists(&state.pool, id).await?, ENTITY_NAME)?;

    let config = UserConfigRepo::partial_update(&state.pool, id, input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "UserConfig", id }))?;

    let headers = headers::entity_update_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((headers, Json(config)))
}

/// GET /api/user-configs
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserConfig>>> {
    tracing::debug!("REST request to get all UserConfigs");
    let rows = UserConfigRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/user-configs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserConfig>> {
    tracing::debug!(id, "REST request to get UserConfig");
    let config = UserConfigRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "UserConfig", id }))?;
    Ok(Json(config))
}

/// DELETE /api/user-configs/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, HeaderMap)> {
    tracing::debug!(id, "REST request to delete UserConfig");
    if !UserConfigRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "UserConfig", id }));
    }
    tracing::info!(id, "UserConfig deleted");

    let headers = headers::entity_deletion_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((StatusCode::NO_CONTENT, headers))
}
