//! Route definitions for the `/planets` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::planet;
use crate::state::AppState;

/// Routes for planets.
///
/// ```text
/// GET    /planets        -> list
/// DELETE /planets/{id}   -> delete
/// ```
///
/// The collection also answers at `/planets/`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planets", get(planet::list))
        .route("/planets/", get(planet::list))
        .route("/planets/{id}", delete(planet::delete))
}
