//! Subject entity model and DTOs.

use courseware_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `subjects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subject {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// Full-record payload for creating or updating a subject.
///
/// Updates replace the whole record; there is no partial patch.
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectInput {
    pub name: String,
    pub description: Option<String>,
}
