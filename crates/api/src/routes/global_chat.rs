use axum::routing::get;
use axum::Router;

use crate::handlers::global_chat;
use crate::state::AppState;

/// Routes mounted at `/global-chats`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create
/// GET    /{id}     -> get_by_id
/// PUT    /{id}     -> update
/// PATCH  /{id}     -> partial_update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(global_chat::list).post(global_chat::create))
        .route(
            "/{id}",
            get(global_chat::get_by_id)
                .put(global_chat::update)
                .patch(global_chat::partial_update)
                .delete(global_chat::delete),
        )
}
