//! Slug rules.
//!
//! A slug is the public, URL-safe identifier of a rabbi or series. It is
//! distinct from the numeric id and unique per table.

use crate::error::CoreError;
use crate::fields::{validate_required, MAX_NAME_LENGTH};

/// Validate that a slug is non-blank, within length, and URL-safe
/// (ASCII letters, digits, `-` and `_` only).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    validate_required("slug", slug, MAX_NAME_LENGTH)?;
    if let Some(bad) = slug
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(CoreError::Validation(format!(
            "slug '{slug}' contains invalid character '{bad}'. \
             Use letters, digits, '-' or '_'"
        )));
    }
    Ok(())
}

/// Derive a slug suggestion from an English name.
///
/// Lowercases, turns whitespace runs into a single `-`, and drops anything
/// that is not URL-safe. `"Rabbi Shlomo Katz"` becomes `"rabbi-shlomo-katz"`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for word in name.split_whitespace() {
        let cleaned: String = word
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if cleaned.is_empty() {
            continue;
        }
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(&cleaned);
    }
    slug
}
