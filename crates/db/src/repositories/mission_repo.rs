//! Repository for the `missions` table.

use cosmic_core::types::DbId;
use sqlx::PgPool;

use crate::models::mission::{CreateMission, Mission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, scientist_id, planet_id, created_at, updated_at";

/// Provides create and lookup operations for missions.
///
/// Missions are removed only through the cascade from their scientist or
/// planet.
pub struct MissionRepo;

impl MissionRepo {
    /// Insert a new mission, returning the created row.
    ///
    /// Run `validators::check_new_mission` first; the FK constraints reject
    /// dangling ids regardless.
    pub async fn create(pool: &PgPool, input: &CreateMission) -> Result<Mission, sqlx::Error> {
        let query = format!(
            "INSERT INTO missions (name, scientist_id, planet_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(&input.name)
            .bind(input.scientist_id)
            .bind(input.planet_id)
            .fetch_one(pool)
            .await
    }

    /// Find a mission by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE id = $1");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a scientist's missions in insertion order.
    pub async fn list_by_scientist(
        pool: &PgPool,
        scientist_id: DbId,
    ) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE scientist_id = $1 ORDER BY id");
        sqlx::query_as::<_, Mission>(&query)
            .bind(scientist_id)
            .fetch_all(pool)
            .await
    }

    /// List the missions sent to a planet in insertion order.
    pub async fn list_by_planet(
        pool: &PgPool,
        planet_id: DbId,
    ) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE planet_id = $1 ORDER BY id");
        sqlx::query_as::<_, Mission>(&query)
            .bind(planet_id)
            .fetch_all(pool)
            .await
    }
}
