//! Rabbi field rules.

use crate::error::CoreError;
use crate::fields::{
    validate_optional, validate_required, validate_required_if_present, MAX_NAME_LENGTH,
    MAX_URL_LENGTH,
};
use crate::slug::validate_slug;

/// Entity label used in not-found and conflict messages.
pub const ENTITY: &str = "Rabbi";

/// Validate the fields of a new rabbi.
pub fn validate_create(
    name_hebrew: &str,
    name_english: &str,
    slug: &str,
    website_url: Option<&str>,
) -> Result<(), CoreError> {
    validate_required("name_hebrew", name_hebrew, MAX_NAME_LENGTH)?;
    validate_required("name_english", name_english, MAX_NAME_LENGTH)?;
    validate_slug(slug)?;
    validate_optional("website_url", website_url, MAX_URL_LENGTH)
}

/// Validate a partial rabbi update. Omitted fields are left untouched.
pub fn validate_update(
    name_hebrew: Option<&str>,
    name_english: Option<&str>,
    slug: Option<&str>,
    website_url: Option<&str>,
) -> Result<(), CoreError> {
    validate_required_if_present("name_hebrew", name_hebrew, MAX_NAME_LENGTH)?;
    validate_required_if_present("name_english", name_english, MAX_NAME_LENGTH)?;
    if let Some(slug) = slug {
        validate_slug(slug)?;
    }
    validate_optional("website_url", website_url, MAX_URL_LENGTH)
}

/// Message for a slug already owned by another rabbi.
pub fn duplicate_slug_message(slug: &str) -> String {
    format!("{ENTITY} with slug '{slug}' already exists")
}
