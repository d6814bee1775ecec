//! Handlers for the `/schools` resource.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::school::{School, SchoolInput};
use campus_db::repositories::SchoolRepo;
use validator::Validate;

use super::{ensure_exists, ensure_matching_id, ensure_new};
use crate::error::{AppError, AppResult};
use crate::headers;
use crate::state::AppState;

const ENTITY_NAME: &str = "school";
const BASE_PATH: &str = "/api/schools";

/// POST /api/schools
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<SchoolInput>,
) -> AppResult<(StatusCode, HeaderMap, Json<School>)> {
    tracing::debug!(?input, "REST request to save School");
    input.validate().map_err(CoreError::from)?;
    ensure_new(input.id, ENTITY_NAME)?;

    let school = SchoolRepo::create(&state.pool, &input).await?;
    tracing::info!(id = school.id, "School created");

    let headers = headers::entity_creation_alert(
        &state.config.client_app_name,
        ENTITY_NAME,
        BASE_PATH,
        school.id,
    );
    Ok((StatusCode::CREATED, headers, Json(school)))
}

/// PUT /api/schools/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SchoolInput>,
) -> AppResult<(HeaderMap, Json<School>)> {
    tracing::debug!(id, ?input, "REST request to update School");
    input.validate().map_err(CoreError::from)?;
    ensure_matching_id(input.id, id, ENTITY_NAME)?;
    ensure_exists(SchoolRepo::exists(&state.pool, id).await?, ENTITY_NAME)?;

    let school = SchoolRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "School", id }))?;

    let headers = headers::entity_update_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((headers, Json(school)))
}

/// PATCH /api/schools/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SchoolInput>,
) -> AppResult<(HeaderMap, Json<School>)> {
    tracing::debug!(id, ?input, "REST request to partially update School");
    input.validate().map_err(CoreError::from)?;
    ensure_matching_id(input.id, id, ENTITY_NAME)?;
    ensure_exists(SchoolRepo::exists(&state.pool, id).await?, ENTITY_NAME)?;

    let school = SchoolRepo::partial_update(&state.pool, id, input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "School", id }))?;

    let headers = headers::entity_update_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((headers, Json(school)))
}

/// GET /api/schools
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<School>>> {
    tracing::debug!("REST request to get all Schools");
    let rows = SchoolRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/schools/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<School>> {
    tracing::debug!(id, "REST request to get School");
    let school = SchoolRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "School", id }))?;
    Ok(Json(school))
}

/// DELETE /api/schools/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, HeaderMap)> {
    tracing::debug!(id, "REST request to delete School");
    if !SchoolRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "School", id }));
    }
    tracing::info!(id, "School deleted");

    let headers = headers::entity_deletion_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((StatusCode::NO_CONTENT, headers))
}
