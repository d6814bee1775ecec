//! School membership model and input.

use campus_core::types::{DbId, Timestamp};
use campus_core::validation::validate_school_status;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `user_schools` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserSchool {
    pub id: DbId,
    /// One of `ACTIVE`, `INACTIVE`.
    pub status: Option<String>,
    pub user_id: Option<DbId>,
    pub school_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserSchoolInput {
    pub id: Option<DbId>,
    #[validate(custom(function = "validate_school_status"))]
    pub status: Option<String>,
    pub user_id: Option<DbId>,
    pub school_id: Option<DbId>,
}

campus_core::merge_fields!(UserSchoolInput {
    status,
    user_id,
    school_id
});

impl From<UserSchool> for UserSchoolInput {
    fn from(row: UserSchool) -> Self {
        Self {
            id: Some(row.id),
            status: row.status,
            user_id: row.user_id,
            school_id: row.school_id,
        }
    }
}
