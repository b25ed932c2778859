//! Pet entity and DTOs.

use playbill_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

/// A pet row from the `pets` table.
///
/// `owner_id` is a plain integer column; the value is not checked against
/// the `owners` table, so a pet may point at an owner that does not exist.
#[derive(Debug, Clone, FromRow)]
pub struct Pet {
    pub id: DbId,
    pub name: String,
    pub owner_id: Option<DbId>,
}

/// DTO for creating a new pet.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePet {
    pub name: String,
    pub owner_id: Option<DbId>,
}

/// DTO for partially updating a pet. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePet {
    pub name: Option<String>,
    pub owner_id: Option<DbId>,
}
