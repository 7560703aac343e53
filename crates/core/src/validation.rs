//! Field validation messages and helpers.
//!
//! Presence rules are declared on the write DTOs with `#[derive(Validate)]`.
//! Rules that need the database (uniqueness, referenced rows) live in the db
//! crate and reuse the messages defined here. Checks always report a single
//! message: the first failing field in declaration order.

use validator::ValidationErrors;

use crate::error::CoreError;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const NAME_TAKEN: &str = "Name already exists.";
pub const FIELD_OF_STUDY_REQUIRED: &str = "Field of study is required.";
pub const SCIENTIST_REQUIRED: &str = "Scientist must be assigned to a mission.";
pub const SCIENTIST_MISSING: &str = "Scientist must exist.";
pub const PLANET_REQUIRED: &str = "Planet must be assigned to a mission.";
pub const PLANET_MISSING: &str = "Planet must exist.";

/// Return the violation recorded against `field`, if any.
///
/// Uses the rule's `message` when set, otherwise falls back to the rule code
/// so the caller never sees an empty string.
pub fn field_violation(errors: &ValidationErrors, field: &str) -> Option<CoreError> {
    let field_errors = errors.field_errors();
    let first = field_errors.get(field)?.first()?;
    let message = first
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("{field} is invalid ({})", first.code));
    Some(CoreError::Validation(message))
}

/// Fail with the violation recorded against `field`, if validation produced one.
///
/// Callers walk their fields in declaration order and call this before any
/// database-backed rule for the same field, so the first failing field wins.
pub fn check_field(errors: Option<&ValidationErrors>, field: &str) -> Result<(), CoreError> {
    match errors.and_then(|e| field_violation(e, field)) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
