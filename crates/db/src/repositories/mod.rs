//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.
//!
//! Update semantics shared by every repository:
//!
//! - `update` overwrites every column with the input, absent fields
//!   becoming NULL.
//! - `partial_update` locks the row, merges the input over it and writes
//!   the result in one transaction.
//!
//! Both return `None` when the row does not exist.

pub mod event_repo;
pub mod event_user_repo;
pub mod friend_repo;
pub mod friend_status_repo;
pub mod global_chat_repo;
pub mod school_repo;
pub mod user_config_repo;
pub mod user_repo;
pub mod user_school_repo;

pub use event_repo::EventRepo;
pub use event_user_repo::{EventUserRepo, EventUserUsersLoader};
pub use friend_repo::FriendRepo;
pub use friend_status_repo::FriendStatusRepo;
pub use global_chat_repo::GlobalChatRepo;
pub use school_repo::SchoolRepo;
pub use user_config_repo::UserConfigRepo;
pub use user_repo::UserRepo;
pub use user_school_repo::UserSchoolRepo;
