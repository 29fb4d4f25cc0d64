//! Wire types for the two collections.
//!
//! Records carry server-assigned ids and timestamps. Create payloads carry
//! only client-supplied fields. Update payloads are sparse: `None` fields are
//! omitted from the JSON body and left unchanged by the backend.

use kol_torah_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// A rabbi as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rabbi {
    pub id: DbId,
    pub name_hebrew: String,
    pub name_english: String,
    pub slug: String,
    #[serde(default)]
    pub website_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RabbiCreate {
    pub name_hebrew: String,
    pub name_english: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RabbiUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_hebrew: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_english: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

/// A series as returned by the backend. Always owned by exactly one rabbi.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: DbId,
    pub rabbi_id: DbId,
    pub name_hebrew: String,
    pub name_english: String,
    pub slug: String,
    #[serde(default)]
    pub description_hebrew: Option<String>,
    #[serde(default)]
    pub description_english: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(rename = "type")]
    pub series_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesCreate {
    pub rabbi_id: DbId,
    pub name_hebrew: String,
    pub name_english: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_hebrew: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_english: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(rename = "type")]
    pub series_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rabbi_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_hebrew: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_english: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_hebrew: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_english: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub series_type: Option<String>,
}
