//! Domain primitives shared across the Playbill workspace.
//!
//! - [`types`] -- database id and timestamp aliases.
//! - [`error`] -- the [`error::CoreError`] taxonomy the API layer translates to HTTP.
//! - [`validation`] -- pure field checks enforced before writes.

pub mod error;
pub mod types;
pub mod validation;
