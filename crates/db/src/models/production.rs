//! Production entity and DTOs.

use playbill_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A production row from the `productions` table.
///
/// Every descriptive column is nullable; only the timestamps are required.
/// `title` carries a unique index, but two `NULL` titles do not collide.
#[derive(Debug, Clone, FromRow)]
pub struct Production {
    pub id: DbId,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub budget: Option<f64>,
    pub image: Option<String>,
    pub director: Option<String>,
    pub description: Option<String>,
    pub ongoing: Option<bool>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new production.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProduction {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub budget: Option<f64>,
    pub image: Option<String>,
    pub director: Option<String>,
    pub description: Option<String>,
    pub ongoing: Option<bool>,
}

/// DTO for partially updating a production. `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduction {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub budget: Option<f64>,
    pub image: Option<String>,
    pub director: Option<String>,
    pub description: Option<String>,
    pub ongoing: Option<bool>,
}
