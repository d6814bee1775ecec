//! Handlers for the `/global-chats` resource.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::global_chat::{GlobalChat, GlobalChatInput};
use campus_db::repositories::GlobalChatRepo;
use validator::Validate;

use super::{ensure_exists, ensure_matching_id, ensure_new};
use crate::error::{AppError, AppResult};
use crate::headers;
use crate::state::AppState;

const ENTITY_NAME: &str = "globalChat";
const BASE_PATH: &str = "/api/global-chats";

/// POST /api/global-chats
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<GlobalChatInput>,
) -> AppResult<(StatusCode, HeaderMap, Json<GlobalChat>)> {
    tracing::debug!(?input, "REST request to save GlobalChat");
    input.validate().map_err(CoreError::from)?;
    ensure_new(input.id, ENTITY_NAME)?;

    let chat = GlobalChatRepo::create(&state.pool, &input).await?;
    tracing::info!(id = chat.id, "GlobalChat created");

    let headers = headers::entity_creation_alert(
        &state.config.client_app_name,
        ENTITY_NAME,
        BASE_PATH,
        chat.id,
    );
    Ok((StatusCode::CREATED, headers, Json(chat)))
}

/// PUT /api/global-chats/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<GlobalChatInput>,
) -> AppResult<(HeaderMap, Json<GlobalChat>)> {
    tracing::debug!(id, ?input, "REST request to update GlobalChat");
    input.validate().map_err(CoreError::from)?;
    ensure_matching_id(input.id, id, ENTITY_NAME)?;
    ensure_exists(GlobalChatRepo::exists(&state.pool, id).await?, ENTITY_NAME)?;

    let chat = GlobalChatRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "GlobalChat", id }))?;

    let headers = headers::entity_update_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((headers, Json(chat)))
}

/// PATCH /api/global-chats/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<GlobalChatInput>,
) -> AppResult<(HeaderMap, Json<GlobalChat>)> {
    tracing::debug!(id, ?input, "REST request to partially update GlobalChat");
    input.validate().map_err(CoreError::from)?;
    ensure_matching_id(input.id, id, ENTITY_NAME)?;
    ensure_exists(GlobalChatRepo::exists(&state.pool, id).await?, ENTITY_NAME)?;

    let chat = GlobalChatRepo::partial_update(&state.pool, id, input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "GlobalChat", id }))?;

    let headers = headers::entity_update_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((headers, Json(chat)))
}

/// GET /api/global-chats
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<GlobalChat>>> {
    tracing::debug!("REST request to get all GlobalChats");
    let rows = GlobalChatRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/global-chats/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GlobalChat>> {
    tracing::debug!(id, "REST request to get GlobalChat");
    let chat = GlobalChatRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "GlobalChat", id }))?;
    Ok(Json(chat))
}

/// DELETE /api/global-chats/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, HeaderMap)> {
    tracing::debug!(id, "REST request to delete GlobalChat");
    if !GlobalChatRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "GlobalChat", id }));
    }
    tracing::info!(id, "GlobalChat deleted");

    let headers = headers::entity_deletion_alert(&state.config.client_app_name, ENTITY_NAME, id);
    Ok((StatusCode::NO_CONTENT, headers))
}
