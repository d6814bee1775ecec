//! HTTP handlers, one module per resource.
//!
//! Every resource follows the same request contract:
//!
//! - create rejects a body that already carries an id (`idexists`);
//! - full and partial updates require the body id (`idnull`), require it
//!   to match the path id (`idinvalid`), and require the row to exist
//!   (`idnotfound`) before writing.

pub mod event;
pub mod event_user;
pub mod friend;
pub mod friend_status;
pub mod global_chat;
pub mod school;
pub mod user;
pub mod user_config;
pub mod user_school;

use campus_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Reject a create request whose body already has an id.
pub fn ensure_new(body_id: Option<DbId>, entity_name: &'static str) -> AppResult<()> {
    match body_id {
        Some(_) => Err(AppError::BadRequestAlert {
            message: format!("A new {entity_name} cannot already have an ID"),
            entity_name,
            error_key: "idexists",
        }),
        None => Ok(()),
    }
}

/// Require the body id to be present and equal to the path id.
pub fn ensure_matching_id(
    body_id: Option<DbId>,
    path_id: DbId,
    entity_name: &'static str,
) -> AppResult<()> {
    match body_id {
        None => Err(AppError::BadRequestAlert {
            message: "Invalid id".to_string(),
            entity_name,
            error_key: "idnull",
        }),
        Some(id) if id != path_id => Err(AppError::BadRequestAlert {
            message: "Invalid ID".to_string(),
            entity_name,
            error_key: "idinvalid",
        }),
        Some(_) => Ok(()),
    }
}

/// Fail with `idnotfound` unless `exists` is true.
pub fn ensure_exists(exists: bool, entity_name: &'static str) -> AppResult<()> {
    if exists {
        Ok(())
    } else {
        Err(AppError::BadRequestAlert {
            message: "Entity not found".to_string(),
            entity_name,
            error_key: "idnotfound",
        })
    }
}
