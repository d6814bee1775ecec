//! Handlers for the `/event-users` resource.
//!
//! An event attendance carries a many-to-many `users` association. Writes
//! take the association as `user_ids` and respond with it populated. Reads
//! populate it on request (`?eagerload=true`) for listings and always for a
//! single row, going through the batch fetcher so a listing costs one extra
//! query whatever its size.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::event_user::{EventUserInput, EventUserWithUsers};
use campus_db::repositories::EventUserRepo;
use validator::Validate;

use super::{ensure_exists, ensure_matching_id, ensure_new};
use crate::error::{AppError, AppResult};
use crate::headers;
use crate::query::EagerLoadParams;
use crate::state::AppState;

const ENTITY_NAME: &str = "eventUser";
const BASE_PATH: &str = "/api/event-users";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "EventUser",
        id,
    })
}

/// POST /api/event-users
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<EventUserInput>,
) -> AppResult<(StatusCode, HeaderMap, Json<EventUserWithUsers>)> {
    tracing::debug!(?input, "REST request to save EventUser");
    input.validate().map_err(CoreError::from)?;
    ensure_new(input.id, ENTITY_NAME)?;

    let created = EventUserRepo::create(&state.pool, &input).await?;
    let id = created.event_user.id;
    tracing::info!(id, users = created.users.len(), "EventUser created");

    let headers =
        headers::entity_creation_alert(&state.config.client_app_name, ENTITY_NAME, BASE_PATH, id);
    Ok((StatusCode::CREATED, headers, Json(created)))
}

/// PUT /api/event-users/{id}
///
/// Replaces the event and the whole user set; a missing `user_ids` clears it.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<EventUserInput>,
) -> AppResult<(HeaderMap, Json<EventUserWithUsers>)> {
    tracing::debug!(id, ?input, "REST request to update EventUser");
    input.validate().map_err(CoreError::from)?;
    ensure_matching_id(input.id, id, ENTITY_NAME)?;
    ensure_exists(EventUserRepo::exists(&state.pool, id).await?, ENTITY_NAME)?;

    let updated = EventUserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    let headers = headers::entity_update_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((headers, Json(updated)))
}

/// PATCH /api/event-users/{id}
///
/// The user set is only replaced when `user_ids` is present.
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<EventUserInput>,
) -> AppResult<(HeaderMap, Json<EventUserWithUsers>)> {
    tracing::debug!(id, ?input, "REST request to partially update EventUser");
    input.validate().map_err(CoreError::from)?;
    ensure_matching_id(input.id, id, ENTITY_NAME)?;
    ensure_exists(EventUserRepo::exists(&state.pool, id).await?, ENTITY_NAME)?;

    let updated = EventUserRepo::partial_update(&state.pool, id, input)
        .await?
        .ok_or_else(|| not_found(id))?;

    let headers = headers::entity_update_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((headers, Json(updated)))
}

/// GET /api/event-users[?eagerload=true][&page=&size=]
///
/// Ordered by id. With `page` or `size` the response is one page and carries
/// `X-Total-Count` and `Link` headers.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<EagerLoadParams>,
) -> AppResult<Response> {
    tracing::debug!(?params, "REST request to get all EventUsers");
    let pool = &state.pool;

    let response = match (params.page_request(), params.eagerload) {
        (None, false) => Json(EventUserRepo::list(pool).await?).into_response(),
        (None, true) => {
            Json(EventUserRepo::find_all_with_eager_relationships(pool).await?).into_response()
        }
        (Some(request), false) => {
            let page = EventUserRepo::list_page(pool, request).await?;
            let headers = headers::pagination_headers(BASE_PATH, None, &page);
            (headers, Json(page.content)).into_response()
        }
        (Some(request), true) => {
            let page = EventUserRepo::find_page_with_eager_relationships(pool, request).await?;
            let headers = headers::pagination_headers(BASE_PATH, Some("eagerload=true"), &page);
            (headers, Json(page.content)).into_response()
        }
    };
    Ok(response)
}

/// GET /api/event-users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EventUserWithUsers>> {
    tracing::debug!(id, "REST request to get EventUser");
    let event_user = EventUserRepo::find_one_with_eager_relationships(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(event_user))
}

/// DELETE /api/event-users/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, HeaderMap)> {
    tracing::debug!(id, "REST request to delete EventUser");
    if !EventUserRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "EventUser deleted");

    let headers = headers::entity_deletion_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((StatusCode::NO_CONTENT, headers))
}
