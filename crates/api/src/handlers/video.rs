//! Handlers for the videos resource.
//!
//! The public viewer gets the play view with a derived embed link; CRUD
//! lives under `/admin/videos` with the listing paginated at 15.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use courseware_core::embed::embed_link;
use courseware_core::error::CoreError;
use courseware_core::paging::{self, ADMIN_VIDEOS_PAGE_SIZE};
use courseware_core::types::DbId;
use courseware_core::validate::{validate_link, validate_video_title};
use courseware_db::models::video::{Video, VideoInput};
use courseware_db::repositories::{SubjectRepo, VideoRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::query::PageParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for `GET /videos/{id}/play`.
#[derive(Debug, serde::Serialize)]
pub struct PlayView {
    pub video: Video,
    /// Inline-playable form of `video.link`; identical to it when the
    /// stored link is not a recognized share link.
    pub embed_link: String,
}

/// Fetch a video by id or return 404.
async fn ensure_video(pool: &sqlx::PgPool, id: DbId) -> AppResult<Video> {
    VideoRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Video", id }))
}

/// Validate a video payload and check its subject exists.
async fn validate_input(pool: &sqlx::PgPool, input: &VideoInput) -> AppResult<()> {
    validate_video_title(&input.title).map_err(AppError::Core)?;
    validate_link(&input.link).map_err(AppError::Core)?;

    if SubjectRepo::find_by_id(pool, input.subject_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Subject",
            id: input.subject_id,
        }));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Viewer (public)
// ---------------------------------------------------------------------------

/// GET /videos/{id}/play
///
/// The video plus the embed link handed to the player.
pub async fn play(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let video = ensure_video(&state.pool, id).await?;
    let embed_link = embed_link(&video.link);

    Ok(Json(DataResponse {
        data: PlayView { video, embed_link },
    }))
}

// ---------------------------------------------------------------------------
// Admin CRUD
// ---------------------------------------------------------------------------

/// GET /admin/videos?page=
///
/// Every video with its subject name, ordered by subject name then
/// display number, paginated at [`ADMIN_VIDEOS_PAGE_SIZE`].
pub async fn admin_list(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let videos = VideoRepo::list_all(&state.pool).await?;

    let requested = paging::parse_page(params.page.as_deref());
    let page = paging::paginate(videos, ADMIN_VIDEOS_PAGE_SIZE, requested);

    Ok(Json(DataResponse { data: page }))
}

/// POST /admin/videos
pub async fn create(
    admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<VideoInput>,
) -> AppResult<impl IntoResponse> {
    validate_input(&state.pool, &input).await?;

    let video = VideoRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = admin.user_id,
        video_id = video.id,
        subject_id = video.subject_id,
        title = %video.title,
        "Video created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: video })))
}

/// GET /admin/videos/{id}
pub async fn get_by_id(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let video = ensure_video(&state.pool, id).await?;
    Ok(Json(DataResponse { data: video }))
}

/// PUT /admin/videos/{id}
///
/// Full-record replacement; `created_at` keeps its original value.
pub async fn update(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<VideoInput>,
) -> AppResult<impl IntoResponse> {
    validate_input(&state.pool, &input).await?;

    let video = VideoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Video", id }))?;

    tracing::info!(user_id = admin.user_id, video_id = id, "Video updated");

    Ok(Json(DataResponse { data: video }))
}

/// DELETE /admin/videos/{id}
pub async fn delete(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = VideoRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Video", id }));
    }

    tracing::info!(user_id = admin.user_id, video_id = id, "Video deleted");

    Ok(StatusCode::NO_CONTENT)
}
