//! Route definitions for the `/rabbis` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::rabbi;
use crate::state::AppState;

/// Routes for rabbis.
///
/// The collection is served with and without the trailing slash so
/// `/rabbis` and `/rabbis/` behave the same.
///
/// ```text
/// GET    /rabbis/        -> list
/// POST   /rabbis/        -> create
/// GET    /rabbis/{id}    -> get_by_id
/// PUT    /rabbis/{id}    -> update
/// DELETE /rabbis/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(rabbi::list).post(rabbi::create);

    Router::new()
        .route("/rabbis", collection.clone())
        .route("/rabbis/", collection)
        .route(
            "/rabbis/{id}",
            get(rabbi::get_by_id)
                .put(rabbi::update)
                .delete(rabbi::delete),
        )
}
