//! Handlers for the `/events` resource.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::event::{Event, EventInput};
use campus_db::repositories::EventRepo;
use validator::Validate;

use super::{ensure_exists, ensure_matching_id, ensure_new};
use crate::error::{AppError, AppResult};
use crate::headers;
use crate::state::AppState;

const ENTITY_NAME: &str = "event";
const BASE_PATH: &str = "/api/events";

/// POST /api/events
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<EventInput>,
) -> AppResult<(StatusCode, HeaderMap, Json<Event>)> {
    tracing::debug!(?input, "REST request to save Event");
    input.validate().map_err(CoreError::from)?;
    ensure_new(input.id, ENTITY_NAME)?;

    let event = EventRepo::create(&state.pool, &input).await?;
    tracing::info!(id = event.id, "Event created");

    let headers = headers::entity_creation_alert(
        &state.config.client_app_name,
        ENTITY_NAME,
        BASE_PATH,
        event.id,
    );
    Ok((StatusCode::CREATED, headers, Json(event)))
}

/// PUT /api/events/{id}
///
/// Overwrites every field; fields absent from the body become null.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<EventInput>,
) -> AppResult<(HeaderMap, Json<Event>)> {
    tracing::debug!(id, ?input, "REST request to update Event");
    input.validate().map_err(CoreError::from)?;
    ensure_matching_id(input.id, id, ENTITY_NAME)?;
    ensure_exists(EventRepo::exists(&state.pool, id).await?, ENTITY_NAME)?;

    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;

    let headers = headers::entity_update_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((headers, Json(event)))
}

/// PATCH /api/events/{id}
///
/// Only the fields present in the body are written.
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<EventInput>,
) -> AppResult<(HeaderMap, Json<Event>)> {
    tracing::debug!(id, ?input, "REST request to partially update Event");
    input.validate().map_err(CoreError::from)?;
    ensure_matching_id(input.id, id, ENTITY_NAME)?;
    ensure_exists(EventRepo::exists(&state.pool, id).await?, ENTITY_NAME)?;

    let event = EventRepo::partial_update(&state.pool, id, input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;

    let headers = headers::entity_update_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((headers, Json(event)))
}

/// GET /api/events
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    tracing::debug!("REST request to get all Events");
    let events = EventRepo::list(&state.pool).await?;
    Ok(Json(events))
}

/// GET /api/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    tracing::debug!(id, "REST request to get Event");
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(event))
}

/// DELETE /api/events/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, HeaderMap)> {
    tracing::debug!(id, "REST request to delete Event");
    if !EventRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Event", id }));
    }
    tracing::info!(id, "Event deleted");

    let headers = headers::entity_deletion_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((StatusCode::NO_CONTENT, headers))
}
