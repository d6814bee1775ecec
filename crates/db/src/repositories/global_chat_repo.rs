//! Repository for the `global_chats` table.

use campus_core::merge::Merge;
use campus_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::global_chat::{GlobalChat, GlobalChatInput};

const COLUMNS: &str = "id, message, created, user_id, created_at, updated_at";

pub struct GlobalChatRepo;

impl GlobalChatRepo {
    pub async fn create(pool: &PgPool, input: &GlobalChatInput) -> Result<GlobalChat, sqlx::Error> {
        let query = format!(
            "INSERT INTO global_chats (message, created, user_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GlobalChat>(&query)
            .bind(&input.message)
            .bind(input.created)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GlobalChat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM global_chats WHERE id = $1");
        sqlx::query_as::<_, GlobalChat>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM global_chats WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<GlobalChat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM global_chats ORDER BY id");
        sqlx::query_as::<_, GlobalChat>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &GlobalChatInput,
    ) -> Result<Option<GlobalChat>, sqlx::Error> {
        Self::write(pool, id, input).await
    }

    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        patch: GlobalChatInput,
    ) -> Result<Option<GlobalChat>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM global_chats WHERE id = $1 FOR UPDATE");
        let Some(current) = sqlx::query_as::<_, GlobalChat>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let mut merged = GlobalChatInput::from(current);
        merged.merge(patch);
        let updated = Self::write(&mut *tx, id, &merged).await?;

        tx.commit().await?;
        Ok(updated)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM global_chats WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn write<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
        input: &GlobalChatInput,
    ) -> Result<Option<GlobalChat>, sqlx::Error> {
        let query = format!(
            "UPDATE global_chats SET message = $2, created = $3, user_id = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GlobalChat>(&query)
            .bind(id)
            .bind(&input.message)
            .bind(input.created)
            .bind(input.user_id)
            .fetch_optional(executor)
            .await
    }
}
