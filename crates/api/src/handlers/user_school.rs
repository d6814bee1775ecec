//! Handlers for the `/user-schools` resource.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::user_school::{UserSchool, UserSchoolInput};
use campus_db::repositories::UserSchoolRepo;
use validator::Validate;

use super::{ensure_exists, ensure_matching_id, ensure_new};
use crate::error::{AppError, AppResult};
use crate::headers;
use crate::state::AppState;

const ENTITY_NAME: &str = "userSchool";
const BASE_PATH: &str = "/api/user-schools";

/// POST /api/user-schools
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<UserSchoolInput>,
) -> AppResult<(StatusCode, HeaderMap, Json<UserSchool>)> {
    tracing::debug!(?input, "REST request to save UserSchool");
    input.validate().map_err(CoreError::from)?;
    ensure_new(input.id, ENTITY_NAME)?;

    let membership = UserSchoolRepo::create(&state.pool, &input).await?;
    tracing::info!(id = membership.id, "UserSchool created");

    let headers = headers::entity_creation_alert(
        &state.config.client_app_name,
        ENTITY_NAME,
        BASE_PATH,
        membership.id,
    );
    Ok((StatusCode::CREATED, headers, Json(membership)))
}

/// PUT /api/user-schools/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UserSchoolInput>,
) -> AppResult<(HeaderMap, Json<UserSchool>)> {
    tracing::debug!(id, ?input, "REST request to update UserSchool");
    input.validate().map_err(CoreError::from)?;
    ensure_matching_id(input.id, id, ENTITY_NAME)?;
    ensure_exists(UserSchoolRepo::exists(&state.pool, id).await?, ENTITY_NAME)?;

    let membership = UserSchoolRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "UserSchool", id }))?;

    let headers = headers::entity_update_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((headers, Json(membership)))
}

/// PATCH /api/user-schools/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UserSchoolInput>,
) -> AppResult<(HeaderMap, Json<UserSchool>)> {
    tracing::debug!(id, ?input, "REST request to partially update UserSchool");
    input.validate().map_err(CoreError::from)?;
    ensure_matching_id(input.id, id, ENTITY_NAME)?;
    ensure_exists(UserSchoolRepo::exists(&state.pool, id).await?, ENTITY_NAME)?;

    let membership = UserSchoolRepo::partial_update(&state.pool, id, input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "UserSchool", id }))?;

    let headers = headers::entity_update_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((headers, Json(membership)))
}

/// GET /api/user-schools
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserSchool>>> {
    tracing::debug!("REST request to get all UserSchools");
    let rows = UserSchoolRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/user-schools/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserSchool>> {
    tracing::debug!(id, "REST request to get UserSchool");
    let membership = UserSchoolRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "UserSchool", id }))?;
    Ok(Json(membership))
}

/// DELETE /api/user-schools/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, HeaderMap)> {
    tracing::debug!(id, "REST request to delete UserSchool");
    if !UserSchoolRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "UserSchool", id }));
    }
    tracing::info!(id, "UserSchool deleted");

    let headers = headers::entity_deletion_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((StatusCode::NO_CONTENT, headers))
}
