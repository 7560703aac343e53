//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches, where the
//!   entity is patchable over HTTP

use serde::{Deserialize, Deserializer};

pub mod mission;
pub mod planet;
pub mod scientist;

/// Wrap a key that is present in the body, so an explicit `null` reads as
/// `Some(None)`. Use with `#[serde(default)]` to keep absent keys as `None`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
