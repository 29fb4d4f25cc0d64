//! Shared domain building blocks for the Kol Torah admin workspace.
//!
//! Holds the primitive id/timestamp types, the domain error enum, and the
//! field rules applied to rabbi and series payloads by both the backend and
//! the admin client.

pub mod error;
pub mod fields;
pub mod rabbi;
pub mod series;
pub mod slug;
pub mod types;
