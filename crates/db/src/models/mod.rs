//! Domain model structs and request inputs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input used for create, full update and partial update.
//!   Every input field is optional; a partial update overwrites only the
//!   fields that are present (see [`campus_core::merge`]).

pub mod event;
pub mod event_user;
pub mod friend;
pub mod friend_status;
pub mod global_chat;
pub mod school;
pub mod user;
pub mod user_config;
pub mod user_school;
