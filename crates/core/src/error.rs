use crate::types::DbId;

/// Domain errors shared by every layer above the database.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A field rule failed. The payload is the client-facing message.
    #[error("{0}")]
    Validation(String),
}
