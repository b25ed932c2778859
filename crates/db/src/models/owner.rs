//! Owner entity and DTOs.

use playbill_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

/// An owner row from the `owners` table.
#[derive(Debug, Clone, FromRow)]
pub struct Owner {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new owner.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOwner {
    pub name: String,
}

/// DTO for partially updating an owner. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOwner {
    pub name: Option<String>,
}
