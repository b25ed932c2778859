//! User account entity and DTO.

use playbill_core::types::DbId;
use sqlx::FromRow;

/// A user row from the `users` table.
///
/// Carries the password hash, so this struct must never be serialized to
/// a response body; [`crate::transfer::user`] emits `id` and `username`
/// only.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
}

/// DTO for creating a new user. The caller hashes the password first;
/// plaintext never reaches this layer.
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
}
