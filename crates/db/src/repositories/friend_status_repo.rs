//! Repository for the `friend_statuses` table.

use campus_core::merge::Merge;
use campus_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::friend_status::{FriendStatus, FriendStatusInput};

const COLUMNS: &str = "id, created, last_changed, status, created_at, updated_at";

/// Provides CRUD operations for friendship statuses.
pub struct FriendStatusRepo;

impl FriendStatusRepo {
    pub async fn create(
        pool: &PgPool,
        input: &FriendStatusInput,
    ) -> Result<FriendStatus, sqlx::Error> {
        let query = format!(
            "INSERT INTO friend_statuses (created, last_changed, status) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FriendStatus>(&query)
            .bind(input.created)
            .bind(input.last_changed)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FriendStatus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM friend_statuses WHERE id = $1");
        sqlx::query_as::<_, FriendStatus>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM friend_statuses WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<FriendStatus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM friend_statuses ORDER BY id");
        sqlx::query_as::<_, FriendStatus>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &FriendStatusInput,
    ) -> Result<Option<FriendStatus>, sqlx::Error> {
        Self::write(pool, id, input).await
    }

    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        patch: FriendStatusInput,
    ) -> Result<Option<FriendStatus>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM friend_statuses WHERE id = $1 FOR UPDATE");
        let Some(current) = sqlx::query_as::<_, FriendStatus>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let mut merged = FriendStatusInput::from(current);
        merged.merge(patch);
        let updated = Self::write(&mut *tx, id, &merged).await?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Delete a status. A friendship referencing it keeps a NULL status.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM friend_statuses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn write<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
        input: &FriendStatusInput,
    ) -> Result<Option<FriendStatus>, sqlx::Error> {
        let query = format!(
            "UPDATE friend_statuses SET created = $2, last_changed = $3, status = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FriendStatus>(&query)
            .bind(id)
            .bind(input.created)
            .bind(input.last_changed)
            .bind(&input.status)
            .fetch_optional(executor)
            .await
    }
}
