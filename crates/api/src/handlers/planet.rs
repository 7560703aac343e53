//! Handlers for the `/planets` resource.
//!
//! Planets are seeded out of band, so only listing and deletion are exposed.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cosmic_core::error::CoreError;
use cosmic_core::types::DbId;
use cosmic_db::repositories::PlanetRepo;

use crate::error::{AppError, AppResult};
use crate::response::PlanetView;
use crate::state::AppState;

/// GET /planets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PlanetView>>> {
    let planets = PlanetRepo::list(&state.pool).await?;
    Ok(Json(planets.into_iter().map(PlanetView::from).collect()))
}

/// DELETE /planets/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PlanetRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::Persistence)?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Planet",
            id,
        }));
    }

    tracing::info!(planet_id = id, "Planet deleted");
    Ok(StatusCode::OK)
}
