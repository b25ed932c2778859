//! Repository for the `sessions` table.

use chrono::Utc;
use playbill_core::types::{DbId, Timestamp};

use crate::models::session::{CreateSession, Session};
use crate::DbPool;

/// Column list shared by every query that reads sessions back.
const COLUMNS: &str = "id, user_id, token_hash, expires_at, created_at";

/// Storage for login sessions. Lookup is by token hash only; the
/// plaintext token never reaches this layer.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session and return the created row.
    pub async fn create(pool: &DbPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (user_id, token_hash, expires_at, created_at) \
             VALUES (?, ?, ?, ?) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.user_id)
            .bind(&input.token_hash)
            .bind(input.expires_at)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Fetch a session by the hash of its token.
    ///
    /// Expiry is not checked here; callers compare `expires_at` against
    /// the current instant.
    pub async fn find_by_token_hash(
        pool: &DbPool,
        token_hash: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE token_hash = ?");
        sqlx::query_as::<_, Session>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Delete a session by id. Returns `true` when a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every session that expired before `now`. Returns the number
    /// of rows removed.
    pub async fn delete_expired(pool: &DbPool, now: Timestamp) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at < ?")
            .bind(now)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
