//! Repository for the `user_schools` table.

use campus_core::merge::Merge;
use campus_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::user_school::{UserSchool, UserSchoolInput};

const COLUMNS: &str = "id, status, user_id, school_id, created_at, updated_at";

/// Provides CRUD operations for school memberships.
pub struct UserSchoolRepo;

impl UserSchoolRepo {
    pub async fn create(pool: &PgPool, input: &UserSchoolInput) -> Result<UserSchool, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_schools (status, user_id, school_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSchool>(&query)
            .bind(&input.status)
            .bind(input.user_id)
            .bind(input.school_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UserSchool>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_schools WHERE id = $1");
        sqlx::query_as::<_, UserSchool>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM user_schools WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<UserSchool>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_schools ORDER BY id");
        sqlx::query_as::<_, UserSchool>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UserSchoolInput,
    ) -> Result<Option<UserSchool>, sqlx::Error> {
        Self::write(pool, id, input).await
    }

    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        patch: UserSchoolInput,
    ) -> Result<Option<UserSchool>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM user_schools WHERE id = $1 FOR UPDATE");
        let Some(current) = sqlx::query_as::<_, UserSchool>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let mut merged = UserSchoolInput::from(current);
        merged.merge(patch);
        let updated = Self::write(&mut *tx, id, &merged).await?;

        tx.commit().await?;
        Ok(updated)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_schools WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn write<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
        input: &UserSchoolInput,
    ) -> Result<Option<UserSchool>, sqlx::Error> {
        let query = format!(
            "UPDATE user_schools SET status = $2, user_id = $3, school_id = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSchool>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(input.user_id)
            .bind(input.school_id)
            .fetch_optional(executor)
            .await
    }
}
