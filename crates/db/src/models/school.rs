//! School model and input.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `schools` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct School {
    pub id: DbId,
    pub name: Option<String>,
    pub adress: Option<String>,
    pub email_domain: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SchoolInput {
    pub id: Option<DbId>,
    pub name: Option<String>,
    pub adress: Option<String>,
    pub email_domain: Option<String>,
}

campus_core::merge_fields!(SchoolInput {
    name,
    adress,
    email_domain
});

impl From<School> for SchoolInput {
    fn from(row: School) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            adress: row.adress,
            email_domain: row.email_domain,
        }
    }
}
