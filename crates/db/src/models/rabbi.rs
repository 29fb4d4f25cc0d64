//! Rabbi entity model and DTOs.

use kol_torah_core::error::CoreError;
use kol_torah_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A rabbi row from the `rabbis` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rabbi {
    pub id: DbId,
    pub name_hebrew: String,
    pub name_english: String,
    pub slug: String,
    pub website_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new rabbi.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRabbi {
    pub name_hebrew: String,
    pub name_english: String,
    pub slug: String,
    pub website_url: Option<String>,
}

impl CreateRabbi {
    pub fn validate(&self) -> Result<(), CoreError> {
        kol_torah_core::rabbi::validate_create(
            &self.name_hebrew,
            &self.name_english,
            &self.slug,
            self.website_url.as_deref(),
        )
    }
}

/// DTO for updating an existing rabbi. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRabbi {
    pub name_hebrew: Option<String>,
    pub name_english: Option<String>,
    pub slug: Option<String>,
    pub website_url: Option<String>,
}

impl UpdateRabbi {
    pub fn validate(&self) -> Result<(), CoreError> {
        kol_torah_core::rabbi::validate_update(
            self.name_hebrew.as_deref(),
            self.name_english.as_deref(),
            self.slug.as_deref(),
            self.website_url.as_deref(),
        )
    }
}
