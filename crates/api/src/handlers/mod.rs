//! Request handlers, one module per resource.

pub mod auth;
pub mod cast_members;
pub mod owners;
pub mod pets;
pub mod productions;
