//! Repository for the `user_configs` table.

use campus_core::merge::Merge;
use campus_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::user_config::{UserConfig, UserConfigInput};

const COLUMNS: &str = "id, share_location, language, user_id, created_at, updated_at";

/// Provides CRUD operations for per-user settings.
pub struct UserConfigRepo;

impl UserConfigRepo {
    /// Insert a config. A second config for the same user violates
    /// `uq_user_configs_user_id`.
    pub async fn create(pool: &PgPool, input: &UserConfigInput) -> Result<UserConfig, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_configs (share_location, language, user_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserConfig>(&query)
            .bind(input.share_location)
            .bind(&input.language)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UserConfig>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_configs WHERE id = $1");
        sqlx::query_as::<_, UserConfig>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM user_configs WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<UserConfig>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_configs ORDER BY id");
        sqlx::query_as::<_, UserConfig>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UserConfigInput,
    ) -> Result<Option<UserConfig>, sqlx::Error> {
        Self::write(pool, id, input).await
    }

    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        patch: UserConfigInput,
    ) -> Result<Option<UserConfig>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM user_configs WHERE id = $1 FOR UPDATE");
        let Some(current) = sqlx::query_as::<_, UserConfig>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let mut merged = UserConfigInput::from(current);
        merged.merge(patch);
        let updated = Self::write(&mut *tx, id, &merged).await?;

        tx.commit().await?;
        Ok(updated)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_configs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn write<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
        input: &UserConfigInput,
    ) -> Result<Option<UserConfig>, sqlx::Error> {
        let query = format!(
            "UPDATE user_configs SET share_location = $2, language = $3, user_id = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserConfig>(&query)
            .bind(id)
            .bind(input.share_location)
            .bind(&input.language)
            .bind(input.user_id)
            .fetch_optional(executor)
            .await
    }
}
