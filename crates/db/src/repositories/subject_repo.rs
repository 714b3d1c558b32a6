//! Repository for the `subjects` table.

use courseware_core::types::DbId;
use sqlx::PgPool;

use crate::models::subject::{Subject, SubjectInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_at";

/// Provides CRUD operations for subjects.
pub struct SubjectRepo;

impl SubjectRepo {
    /// Insert a new subject, returning the created row.
    pub async fn create(pool: &PgPool, input: &SubjectInput) -> Result<Subject, sqlx::Error> {
        let query = format!(
            "INSERT INTO subjects (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a subject by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects WHERE id = $1");
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all subjects, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects ORDER BY name ASC");
        sqlx::query_as::<_, Subject>(&query).fetch_all(pool).await
    }

    /// Total number of subjects.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM subjects")
            .fetch_one(pool)
            .await
    }

    /// Replace a subject's record. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SubjectInput,
    ) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!(
            "UPDATE subjects SET name = $2, description = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a subject and all of its videos in one transaction.
    ///
    /// Children go first so the foreign key constraint holds throughout.
    /// Returns `true` if the subject row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM videos WHERE subject_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM subjects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
