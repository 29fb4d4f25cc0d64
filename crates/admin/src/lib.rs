//! Admin client for the Kol Torah rabbi/series backend.
//!
//! Two layers:
//!
//! - [`api`]: a thin typed HTTP client with one sub-client per collection.
//!   Stateless; every call is a single request with no retry.
//! - [`sync`]: the [`Synchronizer`](sync::Synchronizer), which owns the
//!   in-memory mirror (rabbi list, selected rabbi, that rabbi's series) and
//!   reloads the affected collection after every mutation.
//!
//! [`forms`] and [`panel`] are view-models a presentation layer renders
//! from; [`confirm`] is the capability that layer must provide before
//! anything is deleted.

pub mod api;
pub mod config;
pub mod confirm;
pub mod forms;
pub mod models;
pub mod panel;
pub mod store;
pub mod sync;
