//! Repository for the `planets` table.

use cosmic_core::types::DbId;
use sqlx::PgPool;

use crate::models::planet::{CreatePlanet, Planet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, distance_from_earth, nearest_star, image, created_at, updated_at";

/// Provides read, seed and delete operations for planets.
pub struct PlanetRepo;

impl PlanetRepo {
    /// Insert a planet, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlanet) -> Result<Planet, sqlx::Error> {
        let query = format!(
            "INSERT INTO planets (name, distance_from_earth, nearest_star, image)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .bind(&input.distance_from_earth)
            .bind(&input.nearest_star)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Find a planet by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = $1");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all planets in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets ORDER BY id");
        sqlx::query_as::<_, Planet>(&query).fetch_all(pool).await
    }

    /// Delete a planet by ID, cascading to its missions. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a planet with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM planets WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Distinct planets the scientist has at least one mission to.
    pub async fn list_for_scientist(
        pool: &PgPool,
        scientist_id: DbId,
    ) -> Result<Vec<Planet>, sqlx::Error> {
        sqlx::query_as::<_, Planet>(
            "SELECT DISTINCT p.id, p.name, p.distance_from_earth, p.nearest_star, p.image,
                    p.created_at, p.updated_at
             FROM planets p
             JOIN missions m ON m.planet_id = p.id
             WHERE m.scientist_id = $1
             ORDER BY p.id",
        )
        .bind(scientist_id)
        .fetch_all(pool)
        .await
    }
}
