use axum::routing::get;
use axum::Router;

use crate::handlers::friend;
use crate::state::AppState;

/// Routes mounted at `/friends`.
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
        .route("/", get(friend::list).post(friend::create))
        .route(
            "/{id}",
            get(friend::get_by_id)
                .put(friend::update)
                .patch(friend::partial_update)
                .delete(friend::delete),
        )
}
