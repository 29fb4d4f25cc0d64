//! Series field rules.
//!
//! The `type` field is free-form ("Parsha", "Holidays", ...) but bounded.

use crate::error::CoreError;
use crate::fields::{
    validate_optional, validate_required, validate_required_if_present, MAX_NAME_LENGTH,
    MAX_URL_LENGTH,
};
use crate::slug::validate_slug;

/// Entity label used in not-found and conflict messages.
pub const ENTITY: &str = "Series";

/// Maximum length for the series type/category (characters).
pub const MAX_TYPE_LENGTH: usize = 100;

/// Validate the fields of a new series.
pub fn validate_create(
    name_hebrew: &str,
    name_english: &str,
    slug: &str,
    website_url: Option<&str>,
    series_type: &str,
) -> Result<(), CoreError> {
    validate_required("name_hebrew", name_hebrew, MAX_NAME_LENGTH)?;
    validate_required("name_english", name_english, MAX_NAME_LENGTH)?;
    validate_slug(slug)?;
    validate_optional("website_url", website_url, MAX_URL_LENGTH)?;
    validate_required("type", series_type, MAX_TYPE_LENGTH)
}

/// Validate a partial series update. Omitted fields are left untouched.
pub fn validate_update(
    name_hebrew: Option<&str>,
    name_english: Option<&str>,
    slug: Option<&str>,
    website_url: Option<&str>,
    series_type: Option<&str>,
) -> Result<(), CoreError> {
    validate_required_if_present("name_hebrew", name_hebrew, MAX_NAME_LENGTH)?;
    validate_required_if_present("name_english", name_english, MAX_NAME_LENGTH)?;
    if let Some(slug) = slug {
        validate_slug(slug)?;
    }
    validate_optional("website_url", website_url, MAX_URL_LENGTH)?;
    validate_required_if_present("type", series_type, MAX_TYPE_LENGTH)
}

/// Message for a slug already owned by another series.
pub fn duplicate_slug_message(slug: &str) -> String {
    format!("{ENTITY} with slug '{slug}' already exists")
}
