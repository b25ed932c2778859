//! Repository for the `productions` table.

use chrono::Utc;
use playbill_core::types::DbId;

use crate::models::production::{CreateProduction, Production, UpdateProduction};
use crate::DbPool;

/// Column list shared by every query that reads productions back.
const COLUMNS: &str =
    "id, title, genre, budget, image, director, description, ongoing, created_at, updated_at";

/// CRUD operations for productions.
pub struct ProductionRepo;

impl ProductionRepo {
    /// Insert a new production and return the created row.
    ///
    /// Both timestamps are set to the current instant. Fails with a
    /// database error when `title` collides with an existing one.
    pub async fn create(
        pool: &DbPool,
        input: &CreateProduction,
    ) -> Result<Production, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO productions \
                (title, genre, budget, image, director, description, ongoing, \
                 created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Production>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.budget)
            .bind(&input.image)
            .bind(&input.director)
            .bind(&input.description)
            .bind(input.ongoing)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Fetch a production by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Production>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM productions WHERE id = ?");
        sqlx::query_as::<_, Production>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all productions in id order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Production>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM productions ORDER BY id");
        sqlx::query_as::<_, Production>(&query).fetch_all(pool).await
    }

    /// Apply the non-`None` fields of `input` to a production.
    ///
    /// `updated_at` is always refreshed. Returns `None` when no row with
    /// `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateProduction,
    ) -> Result<Option<Production>, sqlx::Error> {
        let query = format!(
            "UPDATE productions SET \
                title = COALESCE(?, title), \
                genre = COALESCE(?, genre), \
                budget = COALESCE(?, budget), \
                image = COALESCE(?, image), \
                director = COALESCE(?, director), \
                description = COALESCE(?, description), \
                ongoing = COALESCE(?, ongoing), \
                updated_at = ? \
             WHERE id = ? RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Production>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.budget)
            .bind(&input.image)
            .bind(&input.director)
            .bind(&input.description)
            .bind(input.ongoing)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a production. Returns `true` when a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM productions WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
