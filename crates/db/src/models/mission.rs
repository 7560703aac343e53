//! Mission entity model and DTOs.
//!
//! A mission joins one scientist to one planet. The same pair may appear on
//! any number of missions.

use cosmic_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A mission row from the `missions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mission {
    pub id: DbId,
    pub name: String,
    pub scientist_id: DbId,
    pub planet_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a mission. Run `validators::check_new_mission` first;
/// the id fields are only checked for presence and existence there.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateMission {
    #[validate(
        required(message = "Name is required."),
        length(min = 1, message = "Name is required.")
    )]
    pub name: Option<String>,
    pub scientist_id: Option<DbId>,
    pub planet_id: Option<DbId>,
}
