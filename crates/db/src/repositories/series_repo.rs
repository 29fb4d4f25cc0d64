//! Repository for the `series` table.

use kol_torah_core::types::DbId;
use sqlx::PgPool;

use crate::models::series::{CreateSeries, Series, UpdateSeries};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, rabbi_id, name_hebrew, name_english, slug, \
    description_hebrew, description_english, website_url, type, created_at, updated_at";

/// Provides CRUD operations for series.
pub struct SeriesRepo;

impl SeriesRepo {
    /// Insert a new series, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSeries) -> Result<Series, sqlx::Error> {
        let query = format!(
            "INSERT INTO series
                (rabbi_id, name_hebrew, name_english, slug,
                 description_hebrew, description_english, website_url, type)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(input.rabbi_id)
            .bind(&input.name_hebrew)
            .bind(&input.name_english)
            .bind(&input.slug)
            .bind(&input.description_hebrew)
            .bind(&input.description_english)
            .bind(&input.website_url)
            .bind(&input.series_type)
            .fetch_one(pool)
            .await
    }

    /// Find a series by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Series>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM series WHERE id = $1");
        sqlx::query_as::<_, Series>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a series by its public slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Series>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM series WHERE slug = $1");
        sqlx::query_as::<_, Series>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List series in id order. A `None` limit returns every row.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: i64,
    ) -> Result<Vec<Series>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM series ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Series>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List every series owned by the given rabbi, in id order.
    pub async fn list_by_rabbi(pool: &PgPool, rabbi_id: DbId) -> Result<Vec<Series>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM series WHERE rabbi_id = $1 ORDER BY id");
        sqlx::query_as::<_, Series>(&query)
            .bind(rabbi_id)
            .fetch_all(pool)
            .await
    }

    /// Update a series. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSeries,
    ) -> Result<Option<Series>, sqlx::Error> {
        let query = format!(
            "UPDATE series SET
                rabbi_id = COALESCE($2, rabbi_id),
                name_hebrew = COALESCE($3, name_hebrew),
                name_english = COALESCE($4, name_english),
                slug = COALESCE($5, slug),
                description_hebrew = COALESCE($6, description_hebrew),
                description_english = COALESCE($7, description_english),
                website_url = COALESCE($8, website_url),
                type = COALESCE($9, type)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(id)
            .bind(input.rabbi_id)
            .bind(&input.name_hebrew)
            .bind(&input.name_english)
            .bind(&input.slug)
            .bind(&input.description_hebrew)
            .bind(&input.description_english)
            .bind(&input.website_url)
            .bind(&input.series_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete a series by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM series WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
