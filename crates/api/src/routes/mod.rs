pub mod health;
pub mod rabbi;
pub mod series;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /rabbis/                         list, create
/// /rabbis/{id}                     get, update, delete (delete cascades to series)
///
/// /series/                         list, create
/// /series/by-rabbi/{rabbi_id}      list series owned by a rabbi
/// /series/{id}                     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(rabbi::router())
        .merge(series::router())
}
