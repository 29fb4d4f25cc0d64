//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod rabbi_repo;
pub mod series_repo;

pub use rabbi_repo::RabbiRepo;
pub use series_repo::SeriesRepo;
