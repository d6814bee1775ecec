pub mod event;
pub mod event_user;
pub mod friend;
pub mod friend_status;
pub mod global_chat;
pub mod health;
pub mod school;
pub mod user;
pub mod user_config;
pub mod user_school;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /users               list, create
/// /users/{id}          get, delete
///
/// /events              list, create
/// /events/{id}         get, update, partial update, delete
/// /event-users         list (eager, paginated), create
/// /event-users/{id}    get (eager), update, partial update, delete
/// /friends             ...
/// /friend-statuses     ...
/// /global-chats        ...
/// /schools             ...
/// /user-configs        ...
/// /user-schools        ...
/// ```
///
/// Unsupported methods on a known path answer 405.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/events", event::router())
        .nest("/event-users", event_user::router())
        .nest("/friends", friend::router())
        .nest("/friend-statuses", friend_status::router())
        .nest("/global-chats", global_chat::router())
        .nest("/schools", school::router())
        .nest("/user-configs", user_config::router())
        .nest("/user-schools", user_school::router())
}
