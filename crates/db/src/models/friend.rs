//! Friendship model and input.
//!
//! A friendship links two users and owns at most one [`FriendStatus`]
//! (one-to-one, enforced by `uq_friends_status_id`).
//!
//! [`FriendStatus`]: super::friend_status::FriendStatus

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `friends` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Friend {
    pub id: DbId,
    pub status_id: Option<DbId>,
    pub user1_id: Option<DbId>,
    pub user2_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct FriendInput {
    pub id: Option<DbId>,
    pub status_id: Option<DbId>,
    pub user1_id: Option<DbId>,
    pub user2_id: Option<DbId>,
}

campus_core::merge_fields!(FriendInput {
    status_id,
    user1_id,
    user2_id
});

impl From<Friend> for FriendInput {
    fn from(row: Friend) -> Self {
        Self {
            id: Some(row.id),
            status_id: row.status_id,
            user1_id: row.user1_id,
            user2_id: row.user2_id,
        }
    }
}
