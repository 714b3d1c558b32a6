//! Handler for the admin dashboard summary.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use courseware_db::models::video::Video;
use courseware_db::repositories::{SubjectRepo, VideoRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// How many recently-added videos the dashboard shows.
const RECENT_VIDEOS_LIMIT: i64 = 5;

/// Response body for `GET /admin/dashboard`.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub subject_count: i64,
    pub video_count: i64,
    /// The newest videos, most recent first.
    pub recent_videos: Vec<Video>,
}

/// GET /admin/dashboard
pub async fn summary(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let subject_count = SubjectRepo::count(&state.pool).await?;
    let video_count = VideoRepo::count(&state.pool).await?;
    let recent_videos = VideoRepo::list_recent(&state.pool, RECENT_VIDEOS_LIMIT).await?;

    Ok(Json(DataResponse {
        data: DashboardSummary {
            subject_count,
            video_count,
            recent_videos,
        },
    }))
}
