//! Repository for the `event_users` table and its `event_user_users`
//! association.
//!
//! Plain reads return [`EventUser`] rows without users. The
//! `*_with_eager_relationships` methods populate the association through
//! [`EventUserUsersLoader`] and the fetcher in `campus_core::eager`, which
//! costs one extra query per call regardless of how many rows are loaded.

use async_trait::async_trait;
use campus_core::eager::{self, AssociationLoader, EagerLoadError};
use campus_core::merge::Merge;
use campus_core::pagination::{Page, PageRequest};
use campus_core::types::DbId;
use sqlx::{PgConnection, PgExecutor, PgPool};

use crate::models::event_user::{
    collapse_join_rows, EventUser, EventUserInput, EventUserJoinRow, EventUserWithUsers,
};

const COLUMNS: &str = "id, event_id, created_at, updated_at";

const JOIN_COLUMNS: &str = "\
    eu.id, eu.event_id, eu.created_at, eu.updated_at, \
    u.id AS user_id, u.login AS user_login";

/// Provides CRUD and eager-loading operations for event attendances.
pub struct EventUserRepo;

impl EventUserRepo {
    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Insert an attendance and its users in one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &EventUserInput,
    ) -> Result<EventUserWithUsers, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: DbId =
            sqlx::query_scalar("INSERT INTO event_users (event_id) VALUES ($1) RETURNING id")
                .bind(input.event_id)
                .fetch_one(&mut *tx)
                .await?;
        let user_ids = input.user_ids.as_deref().unwrap_or_default();
        Self::replace_users(&mut tx, id, user_ids).await?;

        let created = Self::load_with_users(&mut *tx, &[id])
            .await?
            .pop()
            .ok_or(sqlx::Error::RowNotFound)?;
        tx.commit().await?;
        Ok(created)
    }

    /// Overwrite the event and the whole user set. An absent `user_ids`
    /// clears the association.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &EventUserInput,
    ) -> Result<Option<EventUserWithUsers>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let updated = Self::write(&mut tx, id, input).await?;
        tx.commit().await?;
        Ok(updated)
    }

    /// Merge the provided fields over the stored attendance. The user set
    /// is only replaced when `user_ids` is present.
    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        patch: EventUserInput,
    ) -> Result<Option<EventUserWithUsers>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM event_users WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Ok(None);
        }

        let Some(current) = Self::load_with_users(&mut *tx, &[id]).await?.pop() else {
            return Ok(None);
        };
        let mut merged = EventUserInput::from(current);
        merged.merge(patch);
        let updated = Self::write(&mut tx, id, &merged).await?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Delete an attendance. Its association rows go with it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM event_users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the user set of an attendance.
    ///
    /// Duplicate ids are collapsed; an unknown user id violates the foreign
    /// key on `event_user_users.user_id`.
    pub async fn set_users(pool: &PgPool, id: DbId, user_ids: &[DbId]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        Self::replace_users(&mut tx, id, user_ids).await?;
        tx.commit().await
    }

    async fn write(
        conn: &mut PgConnection,
        id: DbId,
        input: &EventUserInput,
    ) -> Result<Option<EventUserWithUsers>, sqlx::Error> {
        let updated: Option<DbId> =
            sqlx::query_scalar("UPDATE event_users SET event_id = $2 WHERE id = $1 RETURNING id")
                .bind(id)
                .bind(input.event_id)
                .fetch_optional(&mut *conn)
                .await?;
        if updated.is_none() {
            return Ok(None);
        }

        let user_ids = input.user_ids.as_deref().unwrap_or_default();
        Self::replace_users(conn, id, user_ids).await?;
        Ok(Self::load_with_users(&mut *conn, &[id]).await?.pop())
    }

    async fn replace_users(
        conn: &mut PgConnection,
        id: DbId,
        user_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM event_user_users WHERE event_user_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if user_ids.is_empty() {
            return Ok(());
        }
        sqlx::query(
            "INSERT INTO event_user_users (event_user_id, user_id) \
             SELECT $1, user_id FROM UNNEST($2::BIGINT[]) AS t(user_id) \
             ON CONFLICT DO NOTHING",
        )
        .bind(id)
        .bind(user_ids)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Plain reads
    // -----------------------------------------------------------------------

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EventUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM event_users WHERE id = $1");
        sqlx::query_as::<_, EventUser>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM event_users WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all attendances ordered by id, without users.
    pub async fn list(pool: &PgPool) -> Result<Vec<EventUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM event_users ORDER BY id");
        sqlx::query_as::<_, EventUser>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn count<'e, E: PgExecutor<'e>>(executor: E) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM event_users")
            .fetch_one(executor)
            .await
    }

    /// One page of attendances ordered by id, without users.
    ///
    /// The total and the page content are read from one snapshot.
    pub async fn list_page(
        pool: &PgPool,
        request: PageRequest,
    ) -> Result<Page<EventUser>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let total = Self::count(&mut *tx).await?;
        let query = format!("SELECT {COLUMNS} FROM event_users ORDER BY id LIMIT $1 OFFSET $2");
        let content = sqlx::query_as::<_, EventUser>(&query)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(Page::new(content, request, total))
    }

    /// Sorted user ids associated with an attendance.
    pub async fn user_ids_for(pool: &PgPool, id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT user_id FROM event_user_users WHERE event_user_id = $1 ORDER BY user_id",
        )
        .bind(id)
        .fetch_all(pool)
        .await
    }

    /// Load the given attendances with their users in a single query.
    ///
    /// One entry per distinct attendance, in no particular order. Users are
    /// ordered by id.
    pub async fn load_with_users<'e, E: PgExecutor<'e>>(
        executor: E,
        ids: &[DbId],
    ) -> Result<Vec<EventUserWithUsers>, sqlx::Error> {
        let query = format!(
            "SELECT {JOIN_COLUMNS} \
             FROM event_users eu \
             LEFT JOIN event_user_users euu ON euu.event_user_id = eu.id \
             LEFT JOIN users u ON u.id = euu.user_id \
             WHERE eu.id = ANY($1) \
             ORDER BY u.id"
        );
        let rows = sqlx::query_as::<_, EventUserJoinRow>(&query)
            .bind(ids)
            .fetch_all(executor)
            .await?;
        Ok(collapse_join_rows(rows))
    }

    // -----------------------------------------------------------------------
    // Eager reads
    // -----------------------------------------------------------------------

    pub async fn find_one_with_eager_relationships(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EventUserWithUsers>, EagerLoadError<sqlx::Error>> {
        let entity = Self::find_by_id(pool, id)
            .await
            .map_err(EagerLoadError::Store)?;
        eager::fetch_one(&EventUserUsersLoader::new(pool), entity).await
    }

    /// All attendances ordered by id, each with its users.
    pub async fn find_all_with_eager_relationships(
        pool: &PgPool,
    ) -> Result<Vec<EventUserWithUsers>, EagerLoadError<sqlx::Error>> {
        let entities = Self::list(pool).await.map_err(EagerLoadError::Store)?;
        eager::fetch_many(&EventUserUsersLoader::new(pool), entities).await
    }

    /// One page of attendances with their users. The page metadata is that
    /// of the primary query.
    pub async fn find_page_with_eager_relationships(
        pool: &PgPool,
        request: PageRequest,
    ) -> Result<Page<EventUserWithUsers>, EagerLoadError<sqlx::Error>> {
        let page = Self::list_page(pool, request)
            .await
            .map_err(EagerLoadError::Store)?;
        eager::fetch_page(&EventUserUsersLoader::new(pool), page).await
    }
}

/// Loads the `users` association of event attendances from PostgreSQL.
pub struct EventUserUsersLoader<'a> {
    pool: &'a PgPool,
}

impl<'a> EventUserUsersLoader<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<'a> AssociationLoader for EventUserUsersLoader<'a> {
    type Loaded = EventUserWithUsers;
    type Error = sqlx::Error;

    async fn load_one(&self, id: DbId) -> Result<Option<EventUserWithUsers>, sqlx::Error> {
        Ok(EventUserRepo::load_with_users(self.pool, &[id]).await?.pop())
    }

    async fn load_distinct(&self, ids: &[DbId]) -> Result<Vec<EventUserWithUsers>, sqlx::Error> {
        tracing::debug!(count = ids.len(), "Eager-loading event user associations");
        EventUserRepo::load_with_users(self.pool, ids).await
    }
}
