use axum::routing::get;
use axum::Router;

use crate::handlers::user_school;
use crate::state::AppState;

/// Routes mounted at `/user-schools`.
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
        .route("/", get(user_school::list).post(user_school::create))
        .route(
            "/{id}",
            get(user_school::get_by_id)
                .put(user_school::update)
                .patch(user_school::partial_update)
                .delete(user_school::delete),
        )
}
