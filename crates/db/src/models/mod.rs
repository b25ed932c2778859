//! Entity structs and DTOs for every table.
//!
//! Each submodule carries the same trio where it applies:
//! - a `FromRow` entity struct matching the database row
//! - a create DTO for inserts
//! - an update DTO with all-`Option` fields for partial updates

pub mod cast_member;
pub mod owner;
pub mod pet;
pub mod production;
pub mod session;
pub mod user;
