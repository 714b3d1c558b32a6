//! Video entity model and DTOs.

use courseware_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub subject_id: DbId,
    /// Display order within the subject. Not required to be unique.
    pub number: i32,
    pub title: String,
    pub description: Option<String>,
    /// The share link as stored. The embed form is derived at render time.
    pub link: String,
    /// Set once at insert, never updated.
    pub created_at: Timestamp,
}

/// A video row joined with its subject's name, for the admin listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoWithSubject {
    pub id: DbId,
    pub subject_id: DbId,
    pub subject_name: String,
    pub number: i32,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub created_at: Timestamp,
}

/// Full-record payload for creating or updating a video.
///
/// Updates replace the whole record except `created_at`.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoInput {
    pub subject_id: DbId,
    pub number: i32,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}
