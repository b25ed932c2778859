//! Repository for the `users` table.

use playbill_core::types::DbId;

use crate::models::user::{CreateUser, User};
use crate::DbPool;

/// Column list shared by every query that reads users back.
const COLUMNS: &str = "id, username, password_hash";

/// Account lookup and creation. Users are never listed, updated, or
/// deleted through the API, so those methods do not exist here.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user and return the created row.
    pub async fn create(pool: &DbPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query =
            format!("INSERT INTO users (username, password_hash) VALUES (?, ?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Fetch a user by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = ?");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the first user with the given username.
    ///
    /// Usernames are not unique; the lowest id wins, so login resolves
    /// deterministically when duplicates exist.
    pub async fn find_by_username(
        pool: &DbPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = ? ORDER BY id LIMIT 1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }
}
