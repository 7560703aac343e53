pub mod planet;
pub mod scientist;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree. Resources are mounted at the root.
///
/// ```text
/// /scientists                list, create
/// /scientists/{id}           get, patch, delete
///
/// /planets                   list
/// /planets/{id}              delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(scientist::router())
        .merge(planet::router())
}
