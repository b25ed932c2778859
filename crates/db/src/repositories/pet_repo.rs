//! Repository for the `pets` table.

use playbill_core::types::DbId;

use crate::models::pet::{CreatePet, Pet, UpdatePet};
use crate::DbPool;

/// Column list shared by every query that reads pets back.
const COLUMNS: &str = "id, name, owner_id";

/// CRUD operations for pets.
pub struct PetRepo;

impl PetRepo {
    /// Insert a new pet and return the created row.
    ///
    /// `owner_id` is stored as given; it is not checked against the
    /// `owners` table.
    pub async fn create(pool: &DbPool, input: &CreatePet) -> Result<Pet, sqlx::Error> {
        let query = format!("INSERT INTO pets (name, owner_id) VALUES (?, ?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Pet>(&query)
            .bind(&input.name)
            .bind(input.owner_id)
            .fetch_one(pool)
            .await
    }

    /// Fetch a pet by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE id = ?");
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all pets in id order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets ORDER BY id");
        sqlx::query_as::<_, Pet>(&query).fetch_all(pool).await
    }

    /// List the pets whose `owner_id` equals `owner_id`, in id order.
    pub async fn list_by_owner(pool: &DbPool, owner_id: DbId) -> Result<Vec<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE owner_id = ? ORDER BY id");
        sqlx::query_as::<_, Pet>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Apply the non-`None` fields of `input` to a pet.
    ///
    /// Returns `None` when no row with `id` exists. A pet cannot be
    /// detached from its owner through this method, only repointed.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdatePet,
    ) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!(
            "UPDATE pets SET name = COALESCE(?, name), owner_id = COALESCE(?, owner_id) \
             WHERE id = ? RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(&input.name)
            .bind(input.owner_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pet. Returns `true` when a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pets WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
