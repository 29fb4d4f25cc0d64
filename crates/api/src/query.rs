//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional narrowing for the collection endpoints (`?skip=&limit=`).
///
/// Without `limit` the whole collection is returned. Values are clamped via
/// [`kol_torah_db::clamp_limit`] / [`kol_torah_db::clamp_offset`] before
/// reaching the repositories.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl ListParams {
    /// Clamped `(limit, offset)` pair.
    pub fn window(&self) -> (Option<i64>, i64) {
        (
            kol_torah_db::clamp_limit(self.limit),
            kol_torah_db::clamp_offset(self.skip),
        )
    }
}
