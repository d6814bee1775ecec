use axum::routing::get;
use axum::Router;

use crate::handlers::friend_status;
use crate::state::AppState;

/// Routes mounted at `/friend-statuses`.
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
        .route("/", get(friend_status::list).post(friend_status::create))
        .route(
            "/{id}",
            get(friend_status::get_by_id)
                .put(friend_status::update)
                .patch(friend_status::partial_update)
                .delete(friend_status::delete),
        )
}
