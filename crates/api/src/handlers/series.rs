//! Handlers for the `/series` resource.
//!
//! Every series belongs to exactly one rabbi, so creating a series or moving
//! it to another rabbi first checks that the target rabbi exists.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kol_torah_core::series::{duplicate_slug_message, ENTITY};
use kol_torah_core::types::DbId;
use kol_torah_db::models::series::{CreateSeries, Series, UpdateSeries};
use kol_torah_db::repositories::{RabbiRepo, SeriesRepo};

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::state::AppState;

async fn ensure_rabbi_exists(state: &AppState, rabbi_id: DbId) -> AppResult<()> {
    RabbiRepo::find_by_id(&state.pool, rabbi_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::not_found(kol_torah_core::rabbi::ENTITY, rabbi_id))
}

/// Reject `slug` if it belongs to a series other than `current_id`.
async fn ensure_slug_available(
    state: &AppState,
    slug: &str,
    current_id: Option<DbId>,
) -> AppResult<()> {
    match SeriesRepo::find_by_slug(&state.pool, slug).await? {
        Some(existing) if Some(existing.id) != current_id => {
            Err(AppError::BadRequest(duplicate_slug_message(slug)))
        }
        _ => Ok(()),
    }
}

/// POST /series/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSeries>,
) -> AppResult<(StatusCode, Json<Series>)> {
    input.validate()?;
    ensure_rabbi_exists(&state, input.rabbi_id).await?;
    ensure_slug_available(&state, &input.slug, None).await?;

    let series = SeriesRepo::create(&state.pool, &input).await?;
    tracing::info!(
        series_id = series.id,
        rabbi_id = series.rabbi_id,
        slug = %series.slug,
        "Series created"
    );
    Ok((StatusCode::CREATED, Json(series)))
}

/// GET /series/
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Series>>> {
    let (limit, offset) = params.window();
    let series = SeriesRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(series))
}

/// GET /series/by-rabbi/{rabbi_id}
pub async fn list_by_rabbi(
    State(state): State<AppState>,
    Path(rabbi_id): Path<DbId>,
) -> AppResult<Json<Vec<Series>>> {
    ensure_rabbi_exists(&state, rabbi_id).await?;
    let series = SeriesRepo::list_by_rabbi(&state.pool, rabbi_id).await?;
    Ok(Json(series))
}

/// GET /series/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Series>> {
    let series = SeriesRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    Ok(Json(series))
}

/// PUT /series/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSeries>,
) -> AppResult<Json<Series>> {
    input.validate()?;
    if let Some(rabbi_id) = input.rabbi_id {
        ensure_rabbi_exists(&state, rabbi_id).await?;
    }
    if let Some(slug) = &input.slug {
        ensure_slug_available(&state, slug, Some(id)).await?;
    }

    let series = SeriesRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    Ok(Json(series))
}

/// DELETE /series/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if SeriesRepo::delete(&state.pool, id).await? {
        tracing::info!(series_id = id, "Series deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
