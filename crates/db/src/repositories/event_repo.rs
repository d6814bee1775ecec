//! Repository for the `events` table.

use campus_core::merge::Merge;
use campus_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::event::{Event, EventInput};

const COLUMNS: &str = "\
    id, latitude, longitude, header, description, created, planned, \
    created_by_id, created_at, updated_at";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event. The input id is ignored.
    pub async fn create(pool: &PgPool, input: &EventInput) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events \
                (latitude, longitude, header, description, created, planned, created_by_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.header)
            .bind(&input.description)
            .bind(input.created)
            .bind(input.planned)
            .bind(input.created_by_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM events WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all events ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY id");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Overwrite every column of an event.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &EventInput,
    ) -> Result<Option<Event>, sqlx::Error> {
        Self::write(pool, id, input).await
    }

    /// Merge the provided fields over the stored event.
    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        patch: EventInput,
    ) -> Result<Option<Event>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1 FOR UPDATE");
        let current = sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(current) = current else {
            return Ok(None);
        };

        let mut merged = EventInput::from(current);
        merged.merge(patch);
        let updated = Self::write(&mut *tx, id, &merged).await?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Delete an event. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn write<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
        input: &EventInput,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                latitude = $2, longitude = $3, header = $4, description = $5, \
                created = $6, planned = $7, created_by_id = $8 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.header)
            .bind(&input.description)
            .bind(input.created)
            .bind(input.planned)
            .bind(input.created_by_id)
            .fetch_optional(executor)
            .await
    }
}
