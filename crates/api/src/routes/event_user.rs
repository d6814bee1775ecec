use axum::routing::get;
use axum::Router;

use crate::handlers::event_user;
use crate::state::AppState;

/// Routes mounted at `/event-users`.
///
/// ```text
/// GET    /         -> list (?eagerload=true, ?page=&size=)
/// POST   /         -> create
/// GET    /{id}     -> get_by_id
/// PUT    /{id}     -> update
/// PATCH  /{id}     -> partial_update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(event_user::list).post(event_user::create))
        .route(
            "/{id}",
            get(event_user::get_by_id)
                .put(event_user::update)
                .patch(event_user::partial_update)
                .delete(event_user::delete),
        )
}
