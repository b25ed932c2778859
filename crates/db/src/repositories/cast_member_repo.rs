//! Repository for the `cast_members` table.

use chrono::Utc;
use playbill_core::types::DbId;

use crate::models::cast_member::{CastMember, CreateCastMember, UpdateCastMember};
use crate::DbPool;

/// Column list shared by every query that reads cast members back.
const COLUMNS: &str = "id, name, role, production_id, created_at, updated_at";

/// CRUD operations for cast members.
pub struct CastMemberRepo;

impl CastMemberRepo {
    /// Insert a new cast member and return the created row.
    ///
    /// `production_id` is stored as given; it is not checked against the
    /// `productions` table.
    pub async fn create(
        pool: &DbPool,
        input: &CreateCastMember,
    ) -> Result<CastMember, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO cast_members (name, role, production_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CastMember>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(input.production_id)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Fetch a cast member by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<CastMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cast_members WHERE id = ?");
        sqlx::query_as::<_, CastMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all cast members in id order.
    pub async fn list(pool: &DbPool) -> Result<Vec<CastMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cast_members ORDER BY id");
        sqlx::query_as::<_, CastMember>(&query).fetch_all(pool).await
    }

    /// List the cast members of one production, in id order.
    pub async fn list_by_production(
        pool: &DbPool,
        production_id: DbId,
    ) -> Result<Vec<CastMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cast_members WHERE production_id = ? ORDER BY id");
        sqlx::query_as::<_, CastMember>(&query)
            .bind(production_id)
            .fetch_all(pool)
            .await
    }

    /// Apply the non-`None` fields of `input` to a cast member.
    ///
    /// `updated_at` is always refreshed. Returns `None` when no row with
    /// `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateCastMember,
    ) -> Result<Option<CastMember>, sqlx::Error> {
        let query = format!(
            "UPDATE cast_members SET \
                name = COALESCE(?, name), \
                role = COALESCE(?, role), \
                production_id = COALESCE(?, production_id), \
                updated_at = ? \
             WHERE id = ? RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CastMember>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(input.production_id)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a cast member. Returns `true` when a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cast_members WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
