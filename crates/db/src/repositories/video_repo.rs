//! Repository for the `videos` table.

use courseware_core::types::DbId;
use sqlx::PgPool;

use crate::models::video::{Video, VideoInput, VideoWithSubject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, subject_id, number, title, description, link, created_at";

/// Provides CRUD operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video, returning the created row.
    ///
    /// `created_at` is set by the database and never touched again.
    pub async fn create(pool: &PgPool, input: &VideoInput) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (subject_id, number, title, description, link)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(input.subject_id)
            .bind(input.number)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.link)
            .fetch_one(pool)
            .await
    }

    /// Find a video by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all videos for a subject, ordered by display number ascending.
    pub async fn list_by_subject(
        pool: &PgPool,
        subject_id: DbId,
    ) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos
             WHERE subject_id = $1
             ORDER BY number ASC"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(subject_id)
            .fetch_all(pool)
            .await
    }

    /// List every video with its subject name, ordered by subject name then
    /// display number. Feeds the admin listing.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<VideoWithSubject>, sqlx::Error> {
        sqlx::query_as::<_, VideoWithSubject>(
            "SELECT v.id, v.subject_id, s.name AS subject_name, v.number,
                    v.title, v.description, v.link, v.created_at
             FROM videos v
             JOIN subjects s ON s.id = v.subject_id
             ORDER BY s.name ASC, v.number ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// The most recently added videos, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos
             ORDER BY created_at DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Total number of videos.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM videos")
            .fetch_one(pool)
            .await
    }

    /// Replace a video's record, leaving `created_at` untouched.
    /// Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &VideoInput,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET
                subject_id = $2, number = $3, title = $4,
                description = $5, link = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(input.subject_id)
            .bind(input.number)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.link)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a video. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
