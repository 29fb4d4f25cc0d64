//! Series entity model and DTOs.

use kol_torah_core::error::CoreError;
use kol_torah_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A series row from the `series` table.
///
/// The `type` column is exposed as `series_type` in Rust and renamed back
/// to `type` on the wire.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Series {
    pub id: DbId,
    pub rabbi_id: DbId,
    pub name_hebrew: String,
    pub name_english: String,
    pub slug: String,
    pub description_hebrew: Option<String>,
    pub description_english: Option<String>,
    pub website_url: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub series_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new series. `rabbi_id` must reference an existing rabbi.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSeries {
    pub rabbi_id: DbId,
    pub name_hebrew: String,
    pub name_english: String,
    pub slug: String,
    pub description_hebrew: Option<String>,
    pub description_english: Option<String>,
    pub website_url: Option<String>,
    #[serde(rename = "type")]
    pub series_type: String,
}

impl CreateSeries {
    pub fn validate(&self) -> Result<(), CoreError> {
        kol_torah_core::series::validate_create(
            &self.name_hebrew,
            &self.name_english,
            &self.slug,
            self.website_url.as_deref(),
            &self.series_type,
        )
    }
}

/// DTO for updating an existing series. All fields are optional; setting
/// `rabbi_id` moves the series to another rabbi.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSeries {
    pub rabbi_id: Option<DbId>,
    pub name_hebrew: Option<String>,
    pub name_english: Option<String>,
    pub slug: Option<String>,
    pub description_hebrew: Option<String>,
    pub description_english: Option<String>,
    pub website_url: Option<String>,
    #[serde(rename = "type")]
    pub series_type: Option<String>,
}

impl UpdateSeries {
    pub fn validate(&self) -> Result<(), CoreError> {
        kol_torah_core::series::validate_update(
            self.name_hebrew.as_deref(),
            self.name_english.as_deref(),
            self.slug.as_deref(),
            self.website_url.as_deref(),
            self.series_type.as_deref(),
        )
    }
}
