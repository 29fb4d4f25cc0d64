//! Route definitions for the `/series` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::series;
use crate::state::AppState;

/// Routes for series.
///
/// ```text
/// GET    /series/                      -> list
/// POST   /series/                      -> create
/// GET    /series/by-rabbi/{rabbi_id}   -> list_by_rabbi
/// GET    /series/{id}                  -> get_by_id
/// PUT    /series/{id}                  -> update
/// DELETE /series/{id}                  -> delete
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(series::list).post(series::create);

    Router::new()
        .route("/series", collection.clone())
        .route("/series/", collection)
        .route("/series/by-rabbi/{rabbi_id}", get(series::list_by_rabbi))
        .route(
            "/series/{id}",
            get(series::get_by_id)
                .put(series::update)
                .delete(series::delete),
        )
}
