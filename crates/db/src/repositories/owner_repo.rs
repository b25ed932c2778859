//! Repository for the `owners` table.

use playbill_core::types::DbId;

use crate::models::owner::{CreateOwner, Owner, UpdateOwner};
use crate::DbPool;

/// Column list shared by every query that reads owners back.
const COLUMNS: &str = "id, name";

/// CRUD operations for owners.
pub struct OwnerRepo;

impl OwnerRepo {
    /// Insert a new owner and return the created row.
    pub async fn create(pool: &DbPool, input: &CreateOwner) -> Result<Owner, sqlx::Error> {
        let query = format!("INSERT INTO owners (name) VALUES (?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Owner>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Fetch an owner by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Owner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owners WHERE id = ?");
        sqlx::query_as::<_, Owner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all owners in id order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Owner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owners ORDER BY id");
        sqlx::query_as::<_, Owner>(&query).fetch_all(pool).await
    }

    /// Apply the non-`None` fields of `input` to an owner.
    ///
    /// Returns `None` when no row with `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateOwner,
    ) -> Result<Option<Owner>, sqlx::Error> {
        let query =
            format!("UPDATE owners SET name = COALESCE(?, name) WHERE id = ? RETURNING {COLUMNS}");
        sqlx::query_as::<_, Owner>(&query)
            .bind(&input.name)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an owner. Returns `true` when a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM owners WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
