//! Repository for the `scientists` table.

use cosmic_core::types::DbId;
use sqlx::PgPool;

use crate::models::scientist::{CreateScientist, Scientist, UpdateScientist};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, field_of_study, avatar, created_at, updated_at";

/// Provides CRUD operations for scientists.
pub struct ScientistRepo;

impl ScientistRepo {
    /// Insert a new scientist, returning the created row.
    ///
    /// Callers run `validators::check_new_scientist` first; the NOT NULL and
    /// `uq_scientists_name` constraints still reject anything that slips past.
    pub async fn create(pool: &PgPool, input: &CreateScientist) -> Result<Scientist, sqlx::Error> {
        let query = format!(
            "INSERT INTO scientists (name, field_of_study, avatar)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scientist>(&query)
            .bind(&input.name)
            .bind(&input.field_of_study)
            .bind(&input.avatar)
            .fetch_one(pool)
            .await
    }

    /// Find a scientist by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Scientist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scientists WHERE id = $1");
        sqlx::query_as::<_, Scientist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all scientists in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Scientist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scientists ORDER BY id");
        sqlx::query_as::<_, Scientist>(&query).fetch_all(pool).await
    }

    /// Update a scientist. Only keys present in `input` are applied; a key
    /// sent as `null` writes NULL, which the NOT NULL columns reject.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateScientist,
    ) -> Result<Option<Scientist>, sqlx::Error> {
        let query = format!(
            "UPDATE scientists SET
                name = CASE WHEN $2 THEN $3 ELSE name END,
                field_of_study = CASE WHEN $4 THEN $5 ELSE field_of_study END,
                avatar = CASE WHEN $6 THEN $7 ELSE avatar END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scientist>(&query)
            .bind(id)
            .bind(input.name.is_some())
            .bind(input.name.as_ref().and_then(|v| v.as_deref()))
            .bind(input.field_of_study.is_some())
            .bind(input.field_of_study.as_ref().and_then(|v| v.as_deref()))
            .bind(input.avatar.is_some())
            .bind(input.avatar.as_ref().and_then(|v| v.as_deref()))
            .fetch_optional(pool)
            .await
    }

    /// Delete a scientist by ID. Its missions go with it via `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scientists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a scientist with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM scientists WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Whether `name` is already used by a scientist other than `exclude_id`.
    pub async fn name_taken(
        pool: &PgPool,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM scientists
                WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Distinct scientists that have at least one mission to the planet.
    pub async fn list_for_planet(
        pool: &PgPool,
        planet_id: DbId,
    ) -> Result<Vec<Scientist>, sqlx::Error> {
        sqlx::query_as::<_, Scientist>(
            "SELECT DISTINCT s.id, s.name, s.field_of_study, s.avatar, s.created_at, s.updated_at
             FROM scientists s
             JOIN missions m ON m.scientist_id = s.id
             WHERE m.planet_id = $1
             ORDER BY s.id",
        )
        .bind(planet_id)
        .fetch_all(pool)
        .await
    }
}
