//! User account model and DTOs.

use campus_core::types::{DbId, Timestamp};
use campus_core::validation::validate_not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub login: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub activated: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The slice of a user embedded in other entities' associations.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub login: String,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    /// Must be absent; ids are assigned by the database.
    pub id: Option<DbId>,
    #[validate(length(max = 50), custom(function = "validate_not_blank"))]
    pub login: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Defaults to `true` if omitted.
    pub activated: Option<bool>,
}
