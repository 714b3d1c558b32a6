//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::User;

const COLUMNS: &str = "id, username, password_hash, created_at";

/// Lookup and bootstrap operations for admin users.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by username.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Total number of users. Used to decide whether to bootstrap an admin.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }

    /// Insert a new user with an already-hashed password.
    pub async fn create(
        pool: &PgPool,
        username: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, password_hash)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .bind(password_hash)
            .fetch_one(pool)
            .await
    }
}
