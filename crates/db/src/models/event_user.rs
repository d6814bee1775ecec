//! Event attendance model, its many-to-many user association and inputs.

use std::collections::HashMap;

use campus_core::eager::Identified;
use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::user::UserSummary;

/// A row from the `event_users` table, without its users.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventUser {
    pub id: DbId,
    pub event_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Identified for EventUser {
    fn id(&self) -> DbId {
        self.id
    }
}

/// An event attendance together with every associated user.
#[derive(Debug, Clone, Serialize)]
pub struct EventUserWithUsers {
    #[serde(flatten)]
    pub event_user: EventUser,
    /// Ordered by user id.
    pub users: Vec<UserSummary>,
}

impl Identified for EventUserWithUsers {
    fn id(&self) -> DbId {
        self.event_user.id
    }
}

/// Request body for create, full update and partial update.
///
/// `user_ids` replaces the whole association when present. On a full
/// update an absent list clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EventUserInput {
    pub id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub user_ids: Option<Vec<DbId>>,
}

campus_core::merge_fields!(EventUserInput { event_id, user_ids });

impl From<EventUserWithUsers> for EventUserInput {
    fn from(row: EventUserWithUsers) -> Self {
        Self {
            id: Some(row.event_user.id),
            event_id: row.event_user.event_id,
            user_ids: Some(row.users.into_iter().map(|u| u.id).collect()),
        }
    }
}

/// One row of `event_users LEFT JOIN event_user_users LEFT JOIN users`.
///
/// The user columns are NULL for an event attendance with no users.
#[derive(Debug, Clone, FromRow)]
pub struct EventUserJoinRow {
    pub id: DbId,
    pub event_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub user_id: Option<DbId>,
    pub user_login: Option<String>,
}

/// Fold joined rows into one entry per distinct event attendance.
///
/// Entries come out in first-seen order; users keep the order of the rows.
pub fn collapse_join_rows(rows: Vec<EventUserJoinRow>) -> Vec<EventUserWithUsers> {
    let mut index: HashMap<DbId, usize> = HashMap::new();
    let mut out: Vec<EventUserWithUsers> = Vec::new();

    for row in rows {
        let slot = *index.entry(row.id).or_insert_with(|| {
            out.push(EventUserWithUsers {
                event_user: EventUser {
                    id: row.id,
                    event_id: row.event_id,
                    created_at: row.created_at,
                    updated_at: row.updated_at,
                },
                users: Vec::new(),
            });
            out.len() - 1
        });

        if let (Some(id), Some(login)) = (row.user_id, row.user_login) {
            let users = &mut out[slot].users;
            if !users.iter().any(|u| u.id == id) {
                users.push(UserSummary { id, login });
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn row(id: DbId, user: Option<(DbId, &str)>) -> EventUserJoinRow {
        let now = Utc::now();
        EventUserJoinRow {
            id,
            event_id: Some(100 + id),
            created_at: now,
            updated_at: now,
            user_id: user.map(|(id, _)| id),
            user_login: user.map(|(_, login)| login.to_string()),
        }
    }

    #[test]
    fn collapses_one_entry_per_event_user() {
        let rows = vec![
            row(1, Some((10, "alice"))),
            row(2, Some((10, "alice"))),
            row(1, Some((11, "bob"))),
        ];
        let collapsed = collapse_join_rows(rows);

        assert_eq!(collapsed.len(), 2);
        assert_eq!(collapsed[0].event_user.id, 1);
        assert_eq!(
            collapsed[0].users.iter().map(|u| u.id).collect::<Vec<_>>(),
            vec![10, 11]
        );
        assert_eq!(collapsed[1].users.len(), 1);
    }

    #[test]
    fn event_user_without_users_has_empty_list() {
        let collapsed = collapse_join_rows(vec![row(5, None)]);
        assert_eq!(collapsed.len(), 1);
        assert!(collapsed[0].users.is_empty());
        assert_eq!(collapsed[0].event_user.event_id, Some(105));
    }

    #[test]
    fn repeated_join_rows_do_not_duplicate_users() {
        let rows = vec![row(3, Some((7, "carol"))), row(3, Some((7, "carol")))];
        let collapsed = collapse_join_rows(rows);
        assert_eq!(collapsed[0].users.len(), 1);
    }

    #[test]
    fn input_from_loaded_row_carries_user_ids() {
        let loaded = collapse_join_rows(vec![row(4, Some((2, "x"))), row(4, Some((9, "y")))]);
        let input = EventUserInput::from(loaded.into_iter().next().unwrap());
        assert_eq!(input.id, Some(4));
        assert_eq!(input.user_ids, Some(vec![2, 9]));
    }
}
