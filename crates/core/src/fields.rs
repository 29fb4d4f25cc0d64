//! Generic text field checks shared by the rabbi and series rules.
//!
//! Lengths are counted in characters, not bytes, since names are
//! routinely entered in Hebrew.

use crate::error::CoreError;

/// Maximum length for names and slugs (characters).
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length for website URLs (characters).
pub const MAX_URL_LENGTH: usize = 500;

/// Validate a required text field: non-blank and at most `max` characters.
pub fn validate_required(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    validate_max_length(field, value, max)
}

/// Validate an optional text field. `None` always passes.
pub fn validate_optional(field: &str, value: Option<&str>, max: usize) -> Result<(), CoreError> {
    match value {
        Some(v) => validate_max_length(field, v, max),
        None => Ok(()),
    }
}

/// Validate a field that may be omitted from a partial update, but must be
/// a valid required value when present.
pub fn validate_required_if_present(
    field: &str,
    value: Option<&str>,
    max: usize,
) -> Result<(), CoreError> {
    match value {
        Some(v) => validate_required(field, v, max),
        None => Ok(()),
    }
}

fn validate_max_length(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {max} characters (got {len})"
        )));
    }
    Ok(())
}
