//! Handlers for the `/rabbis` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kol_torah_core::rabbi::{duplicate_slug_message, ENTITY};
use kol_torah_core::types::DbId;
use kol_torah_db::models::rabbi::{CreateRabbi, Rabbi, UpdateRabbi};
use kol_torah_db::repositories::RabbiRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::state::AppState;

/// Reject `slug` if it belongs to a rabbi other than `current_id`.
async fn ensure_slug_available(
    state: &AppState,
    slug: &str,
    current_id: Option<DbId>,
) -> AppResult<()> {
    match RabbiRepo::find_by_slug(&state.pool, slug).await? {
        Some(existing) if Some(existing.id) != current_id => {
            Err(AppError::BadRequest(duplicate_slug_message(slug)))
        }
        _ => Ok(()),
    }
}

/// POST /rabbis/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRabbi>,
) -> AppResult<(StatusCode, Json<Rabbi>)> {
    input.validate()?;
    ensure_slug_available(&state, &input.slug, None).await?;

    let rabbi = RabbiRepo::create(&state.pool, &input).await?;
    tracing::info!(rabbi_id = rabbi.id, slug = %rabbi.slug, "Rabbi created");
    Ok((StatusCode::CREATED, Json(rabbi)))
}

/// GET /rabbis/
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Rabbi>>> {
    let (limit, offset) = params.window();
    let rabbis = RabbiRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(rabbis))
}

/// GET /rabbis/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Rabbi>> {
    let rabbi = RabbiRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    Ok(Json(rabbi))
}

/// PUT /rabbis/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRabbi>,
) -> AppResult<Json<Rabbi>> {
    input.validate()?;
    if let Some(slug) = &input.slug {
        ensure_slug_available(&state, slug, Some(id)).await?;
    }

    let rabbi = RabbiRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    Ok(Json(rabbi))
}

/// DELETE /rabbis/{id}
///
/// Removes the rabbi together with all of their series.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if RabbiRepo::delete(&state.pool, id).await? {
        tracing::info!(rabbi_id = id, "Rabbi deleted with their series");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
