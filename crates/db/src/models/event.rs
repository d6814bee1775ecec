//! Event model and input.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub header: Option<String>,
    pub description: Option<String>,
    pub created: Option<Timestamp>,
    pub planned: Option<Timestamp>,
    pub created_by_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for create, full update and partial update of an event.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EventInput {
    pub id: Option<DbId>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[validate(length(max = 50))]
    pub header: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    pub created: Option<Timestamp>,
    pub planned: Option<Timestamp>,
    pub created_by_id: Option<DbId>,
}

campus_core::merge_fields!(EventInput {
    latitude,
    longitude,
    header,
    description,
    created,
    planned,
    created_by_id,
});

impl From<Event> for EventInput {
    fn from(event: Event) -> Self {
        Self {
            id: Some(event.id),
            latitude: event.latitude,
            longitude: event.longitude,
            header: event.header,
            description: event.description,
            created: event.created,
            planned: event.planned,
            created_by_id: event.created_by_id,
        }
    }
}
