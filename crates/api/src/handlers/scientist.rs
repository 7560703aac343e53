//! Handlers for the `/scientists` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cosmic_core::error::CoreError;
use cosmic_core::types::DbId;
use cosmic_db::models::scientist::{CreateScientist, UpdateScientist};
use cosmic_db::repositories::{MissionRepo, PlanetRepo, ScientistRepo};
use cosmic_db::validators;

use crate::error::{AppError, AppResult};
use crate::response::{ScientistDetailView, ScientistView};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Scientist",
        id,
    })
}

/// GET /scientists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ScientistView>>> {
    let scientists = ScientistRepo::list(&state.pool).await?;
    Ok(Json(scientists.into_iter().map(ScientistView::from).collect()))
}

/// POST /scientists
///
/// Every failure after the body is read is reported as 422.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateScientist>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ScientistView>)> {
    let Json(input) = payload?;

    validators::check_new_scientist(&state.pool, &input).await?;
    let scientist = ScientistRepo::create(&state.pool, &input)
        .await
        .map_err(validators::classify_write_error)?;

    tracing::info!(scientist_id = scientist.id, name = %scientist.name, "Scientist created");
    Ok((StatusCode::CREATED, Json(scientist.into())))
}

/// GET /scientists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ScientistDetailView>> {
    let scientist = ScientistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let missions = MissionRepo::list_by_scientist(&state.pool, id).await?;
    let planets = PlanetRepo::list_for_scientist(&state.pool, id).await?;

    Ok(Json(ScientistDetailView::new(scientist, missions, planets)))
}

/// PATCH /scientists/{id}
///
/// Only `name`, `field_of_study` and `avatar` are patchable. A missing
/// scientist is reported before the body is looked at.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<UpdateScientist>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ScientistView>)> {
    if !ScientistRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }
    let Json(input) = payload?;

    validators::check_scientist_update(&state.pool, id, &input).await?;
    let scientist = ScientistRepo::update(&state.pool, id, &input)
        .await
        .map_err(validators::classify_write_error)?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(scientist_id = id, "Scientist updated");
    Ok((StatusCode::ACCEPTED, Json(scientist.into())))
}

/// DELETE /scientists/{id}
///
/// Removes the scientist and, by cascade, its missions. Responds with an
/// empty 200.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ScientistRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::Persistence)?;
    if !deleted {
        return Err(not_found(id));
    }

    tracing::info!(scientist_id = id, "Scientist deleted");
    Ok(StatusCode::OK)
}
