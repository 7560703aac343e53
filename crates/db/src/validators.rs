//! Write-time validators that need the database.
//!
//! Fields are checked in declaration order: the presence rule from the DTO's
//! `Validate` derive first, then any lookup for the same field. The first
//! failure is returned as [`CoreError::Validation`].

use cosmic_core::error::CoreError;
use cosmic_core::types::DbId;
use cosmic_core::validation::{
    check_field, FIELD_OF_STUDY_REQUIRED, NAME_REQUIRED, NAME_TAKEN, PLANET_MISSING,
    PLANET_REQUIRED, SCIENTIST_MISSING, SCIENTIST_REQUIRED,
};
use sqlx::PgPool;
use validator::Validate;

use crate::models::mission::CreateMission;
use crate::models::scientist::{CreateScientist, UpdateScientist};
use crate::repositories::{PlanetRepo, ScientistRepo};

/// Failure of a write-time check.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The input broke a validation rule.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// The lookup backing a rule failed.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

fn invalid(message: &str) -> WriteError {
    WriteError::Invalid(CoreError::Validation(message.to_string()))
}

/// Classify an error from an insert or update.
///
/// A unique violation on `uq_scientists_name` means another request claimed
/// the name between the check and the write; it reads as the same rule
/// failure the check would have reported.
pub fn classify_write_error(err: sqlx::Error) -> WriteError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.constraint() == Some("uq_scientists_name") {
            return invalid(NAME_TAKEN);
        }
    }
    WriteError::Database(err)
}

/// A patched key that must not be cleared: sent as `null` or `""` fails.
fn check_not_cleared(value: &Option<Option<String>>, message: &str) -> Result<(), WriteError> {
    match value {
        Some(None) => Err(invalid(message)),
        Some(Some(v)) if v.is_empty() => Err(invalid(message)),
        _ => Ok(()),
    }
}

/// Ensure `name` is not used by any scientist other than `exclude_id`.
async fn check_name_free(
    pool: &PgPool,
    name: Option<&str>,
    exclude_id: Option<DbId>,
) -> Result<(), WriteError> {
    if let Some(name) = name {
        if ScientistRepo::name_taken(pool, name, exclude_id).await? {
            return Err(invalid(NAME_TAKEN));
        }
    }
    Ok(())
}

/// Validate a scientist before insert: name present and unused, field of
/// study present.
pub async fn check_new_scientist(pool: &PgPool, input: &CreateScientist) -> Result<(), WriteError> {
    let errors = input.validate().err();

    check_field(errors.as_ref(), "name")?;
    check_name_free(pool, input.name.as_deref(), None).await?;
    check_field(errors.as_ref(), "field_of_study")?;
    Ok(())
}

/// Validate a patch to scientist `id`. Only keys present in the patch are
/// checked, and the scientist's own current name does not count as taken.
/// `avatar` may be cleared; `name` and `field_of_study` may not.
pub async fn check_scientist_update(
    pool: &PgPool,
    id: DbId,
    input: &UpdateScientist,
) -> Result<(), WriteError> {
    check_not_cleared(&input.name, NAME_REQUIRED)?;
    let name = input.name.as_ref().and_then(|v| v.as_deref());
    check_name_free(pool, name, Some(id)).await?;
    check_not_cleared(&input.field_of_study, FIELD_OF_STUDY_REQUIRED)?;
    Ok(())
}

/// Validate a mission before insert: name present, and both the scientist and
/// the planet given and existing. An id of `0` counts as not given.
pub async fn check_new_mission(pool: &PgPool, input: &CreateMission) -> Result<(), WriteError> {
    let errors = input.validate().err();

    check_field(errors.as_ref(), "name")?;

    let scientist_id = input
        .scientist_id
        .filter(|&id| id != 0)
        .ok_or_else(|| invalid(SCIENTIST_REQUIRED))?;
    if !ScientistRepo::exists(pool, scientist_id).await? {
        return Err(invalid(SCIENTIST_MISSING));
    }

    let planet_id = input
        .planet_id
        .filter(|&id| id != 0)
        .ok_or_else(|| invalid(PLANET_REQUIRED))?;
    if !PlanetRepo::exists(pool, planet_id).await? {
        return Err(invalid(PLANET_MISSING));
    }

    Ok(())
}
