use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cosmic_core::error::CoreError;
use cosmic_db::validators::WriteError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] with two body shapes:
///
/// - not-found and read-path database errors: `{ "error": message }`
/// - rejected writes: `{ "errors": [message] }` with 422
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cosmic_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error on a read path.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database error while writing. Reported to the client as 422.
    #[error("{0}")]
    Persistence(sqlx::Error),

    /// A request body that could not be decoded.
    #[error("{0}")]
    Unprocessable(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<WriteError> for AppError {
    fn from(err: WriteError) -> Self {
        match err {
            WriteError::Invalid(core) => AppError::Core(core),
            WriteError::Database(db) => AppError::Persistence(db),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Unprocessable(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    error_body(StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                CoreError::Validation(msg) => errors_body(msg.clone()),
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::Persistence(err) => {
                tracing::warn!(error = %err, "Write rejected by database");
                errors_body(err.to_string())
            }

            AppError::Unprocessable(msg) => errors_body(msg.clone()),
        }
    }
}

fn error_body(status: StatusCode, message: String) -> Response {
    (status, axum::Json(json!({ "error": message }))).into_response()
}

fn errors_body(message: String) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(json!({ "errors": [message] })),
    )
        .into_response()
}

fn internal_error_body() -> Response {
    error_body(
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
    )
}

/// Map a read-path sqlx error to a response.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> Response {
    match err {
        sqlx::Error::RowNotFound => {
            error_body(StatusCode::NOT_FOUND, "Resource not found".to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error_body()
        }
    }
}
