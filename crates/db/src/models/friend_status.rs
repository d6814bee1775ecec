//! Friendship status model and input.

use campus_core::types::{DbId, Timestamp};
use campus_core::validation::validate_friendship_status;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `friend_statuses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FriendStatus {
    pub id: DbId,
    pub created: Option<Timestamp>,
    pub last_changed: Option<Timestamp>,
    /// One of `PENDING`, `ACTIVE`, `BLOCKED`.
    pub status: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct FriendStatusInput {
    pub id: Option<DbId>,
    pub created: Option<Timestamp>,
    pub last_changed: Option<Timestamp>,
    #[validate(custom(function = "validate_friendship_status"))]
    pub status: Option<String>,
}

campus_core::merge_fields!(FriendStatusInput {
    created,
    last_changed,
    status
});

impl From<FriendStatus> for FriendStatusInput {
    fn from(row: FriendStatus) -> Self {
        Self {
            id: Some(row.id),
            created: row.created,
            last_changed: row.last_changed,
            status: row.status,
        }
    }
}
