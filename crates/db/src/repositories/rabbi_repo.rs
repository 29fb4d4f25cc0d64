//! Repository for the `rabbis` table.

use kol_torah_core::types::DbId;
use sqlx::PgPool;

use crate::models::rabbi::{CreateRabbi, Rabbi, UpdateRabbi};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name_hebrew, name_english, slug, website_url, created_at, updated_at";

/// Provides CRUD operations for rabbis.
pub struct RabbiRepo;

impl RabbiRepo {
    /// Insert a new rabbi, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRabbi) -> Result<Rabbi, sqlx::Error> {
        let query = format!(
            "INSERT INTO rabbis (name_hebrew, name_english, slug, website_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rabbi>(&query)
            .bind(&input.name_hebrew)
            .bind(&input.name_english)
            .bind(&input.slug)
            .bind(&input.website_url)
            .fetch_one(pool)
            .await
    }

    /// Find a rabbi by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rabbi>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rabbis WHERE id = $1");
        sqlx::query_as::<_, Rabbi>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a rabbi by its public slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Rabbi>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rabbis WHERE slug = $1");
        sqlx::query_as::<_, Rabbi>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List rabbis in id order. A `None` limit returns every row from `offset`
    /// on. Callers clamp via [`crate::clamp_limit`] / [`crate::clamp_offset`].
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: i64,
    ) -> Result<Vec<Rabbi>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rabbis ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Rabbi>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a rabbi. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRabbi,
    ) -> Result<Option<Rabbi>, sqlx::Error> {
        let query = format!(
            "UPDATE rabbis SET
                name_hebrew = COALESCE($2, name_hebrew),
                name_english = COALESCE($3, name_english),
                slug = COALESCE($4, slug),
                website_url = COALESCE($5, website_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rabbi>(&query)
            .bind(id)
            .bind(&input.name_hebrew)
            .bind(&input.name_english)
            .bind(&input.slug)
            .bind(&input.website_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a rabbi by ID. Its series are removed by the `ON DELETE CASCADE`
    /// foreign key. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rabbis WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
