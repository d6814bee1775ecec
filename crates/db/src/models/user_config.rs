//! Per-user settings model and input.

use campus_core::types::{DbId, Timestamp};
use campus_core::validation::validate_language;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `user_configs` table. At most one per user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserConfig {
    pub id: DbId,
    pub share_location: Option<bool>,
    /// One of `FRENCH`, `ENGLISH`.
    pub language: Option<String>,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserConfigInput {
    pub id: Option<DbId>,
    pub share_location: Option<bool>,
    #[validate(custom(function = "validate_language"))]
    pub language: Option<String>,
    pub user_id: Option<DbId>,
}

campus_core::merge_fields!(UserConfigInput {
    share_location,
    language,
    user_id
});

impl From<UserConfig> for UserConfigInput {
    fn from(row: UserConfig) -> Self {
        Self {
            id: Some(row.id),
            share_location: row.share_location,
            language: row.language,
            user_id: row.user_id,
        }
    }
}
