//! Cast member entity and DTOs.

use playbill_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A cast member row from the `cast_members` table.
///
/// `production_id` is a plain integer column with no database-side check,
/// matching how the pet/owner link works.
#[derive(Debug, Clone, FromRow)]
pub struct CastMember {
    pub id: DbId,
    pub name: Option<String>,
    pub role: Option<String>,
    pub production_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new cast member.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCastMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub production_id: Option<DbId>,
}

/// DTO for partially updating a cast member. `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCastMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub production_id: Option<DbId>,
}
