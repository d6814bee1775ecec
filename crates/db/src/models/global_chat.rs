//! Global chat message model and input.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `global_chats` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GlobalChat {
    pub id: DbId,
    pub message: Option<String>,
    pub created: Option<Timestamp>,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GlobalChatInput {
    pub id: Option<DbId>,
    pub message: Option<String>,
    pub created: Option<Timestamp>,
    pub user_id: Option<DbId>,
}

campus_core::merge_fields!(GlobalChatInput {
    message,
    created,
    user_id
});

impl From<GlobalChat> for GlobalChatInput {
    fn from(row: GlobalChat) -> Self {
        Self {
            id: Some(row.id),
            message: row.message,
            created: row.created,
            user_id: row.user_id,
        }
    }
}
