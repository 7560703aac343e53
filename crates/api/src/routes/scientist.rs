//! Route definitions for the `/scientists` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::scientist;
use crate::state::AppState;

/// Routes for scientists.
///
/// ```text
/// GET    /scientists        -> list
/// POST   /scientists        -> create
/// GET    /scientists/{id}   -> get_by_id
/// PATCH  /scientists/{id}   -> update
/// DELETE /scientists/{id}   -> delete
/// ```
///
/// The collection also answers at `/scientists/`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/scientists", get(scientist::list).post(scientist::create))
        .route("/scientists/", get(scientist::list).post(scientist::create))
        .route(
            "/scientists/{id}",
            get(scientist::get_by_id)
                .patch(scientist::update)
                .delete(scientist::delete),
        )
}
