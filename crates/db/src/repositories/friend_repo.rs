//! Repository for the `friends` table.

use campus_core::merge::Merge;
use campus_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::friend::{Friend, FriendInput};

const COLUMNS: &str = "id, status_id, user1_id, user2_id, created_at, updated_at";

/// Provides CRUD operations for friendships.
pub struct FriendRepo;

impl FriendRepo {
    /// Insert a friendship. A status already owned by another friendship
    /// violates `uq_friends_status_id`.
    pub async fn create(pool: &PgPool, input: &FriendInput) -> Result<Friend, sqlx::Error> {
        let query = format!(
            "INSERT INTO friends (status_id, user1_id, user2_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Friend>(&query)
            .bind(input.status_id)
            .bind(input.user1_id)
            .bind(input.user2_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Friend>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM friends WHERE id = $1");
        sqlx::query_as::<_, Friend>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM friends WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Friend>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM friends ORDER BY id");
        sqlx::query_as::<_, Friend>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &FriendInput,
    ) -> Result<Option<Friend>, sqlx::Error> {
        Self::write(pool, id, input).await
    }

    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        patch: FriendInput,
    ) -> Result<Option<Friend>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM friends WHERE id = $1 FOR UPDATE");
        let Some(current) = sqlx::query_as::<_, Friend>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let mut merged = FriendInput::from(current);
        merged.merge(patch);
        let updated = Self::write(&mut *tx, id, &merged).await?;

        tx.commit().await?;
        Ok(updated)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM friends WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn write<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
        input: &FriendInput,
    ) -> Result<Option<Friend>, sqlx::Error> {
        let query = format!(
            "UPDATE friends SET status_id = $2, user1_id = $3, user2_id = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Friend>(&query)
            .bind(id)
            .bind(input.status_id)
            .bind(input.user1_id)
            .bind(input.user2_id)
            .fetch_optional(executor)
            .await
    }
}
