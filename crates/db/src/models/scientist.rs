//! Scientist entity model and DTOs.

use cosmic_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::present;

/// A scientist row from the `scientists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Scientist {
    pub id: DbId,
    pub name: String,
    pub field_of_study: String,
    pub avatar: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new scientist.
///
/// Clients send the field of study under the key `"field of study"`;
/// `"field_of_study"` is accepted too.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateScientist {
    #[validate(
        required(message = "Name is required."),
        length(min = 1, message = "Name is required.")
    )]
    pub name: Option<String>,
    #[serde(alias = "field of study")]
    #[validate(
        required(message = "Field of study is required."),
        length(min = 1, message = "Field of study is required.")
    )]
    pub field_of_study: Option<String>,
    pub avatar: Option<String>,
}

/// DTO for patching a scientist.
///
/// Each field is `None` when the key is absent and `Some(None)` when the key
/// is sent as `null`. Keys outside this set are rejected at deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateScientist {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", alias = "field of study")]
    pub field_of_study: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub avatar: Option<Option<String>>,
}
