use axum::routing::get;
use axum::Router;

use crate::handlers::user_config;
use crate::state::AppState;

/// Routes mounted at `/user-configs`.
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
        .route("/", get(user_config::list).post(user_config::create))
        .route(
            "/{id}",
            get(user_config::get_by_id)
                .put(user_config::update)
                .patch(user_config::partial_update)
                .delete(user_config::delete),
        )
}
