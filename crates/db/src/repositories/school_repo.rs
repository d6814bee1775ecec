//! Repository for the `schools` table.

use campus_core::merge::Merge;
use campus_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::school::{School, SchoolInput};

const COLUMNS: &str = "id, name, adress, email_domain, created_at, updated_at";

/// Provides CRUD operations for schools.
pub struct SchoolRepo;

impl SchoolRepo {
    pub async fn create(pool: &PgPool, input: &SchoolInput) -> Result<School, sqlx::Error> {
        let query = format!(
            "INSERT INTO schools (name, adress, email_domain) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, School>(&query)
            .bind(&input.name)
            .bind(&input.adress)
            .bind(&input.email_domain)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<School>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schools WHERE id = $1");
        sqlx::query_as::<_, School>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM schools WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<School>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schools ORDER BY id");
        sqlx::query_as::<_, School>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SchoolInput,
    ) -> Result<Option<School>, sqlx::Error> {
        Self::write(pool, id, input).await
    }

    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        patch: SchoolInput,
    ) -> Result<Option<School>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM schools WHERE id = $1 FOR UPDATE");
        let Some(current) = sqlx::query_as::<_, School>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let mut merged = SchoolInput::from(current);
        merged.merge(patch);
        let updated = Self::write(&mut *tx, id, &merged).await?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Delete a school. Memberships pointing at it keep a NULL school.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM schools WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn write<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
        input: &SchoolInput,
    ) -> Result<Option<School>, sqlx::Error> {
        let query = format!(
            "UPDATE schools SET name = $2, adress = $3, email_domain = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, School>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.adress)
            .bind(&input.email_domain)
            .fetch_optional(executor)
            .await
    }
}
