//! Handlers for the subjects resource.
//!
//! The public viewer gets the subject listing and a per-subject detail
//! view with its videos paginated; CRUD lives under `/admin/subjects`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use courseware_core::error::CoreError;
use courseware_core::paging::{self, Page, SUBJECT_VIDEOS_PAGE_SIZE};
use courseware_core::types::DbId;
use courseware_core::validate::validate_subject_name;
use courseware_db::models::subject::{Subject, SubjectInput};
use courseware_db::models::video::Video;
use courseware_db::repositories::{SubjectRepo, VideoRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::query::PageParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for `GET /subjects/{id}`.
#[derive(Debug, serde::Serialize)]
pub struct SubjectDetail {
    pub subject: Subject,
    pub videos: Page<Video>,
}

/// Fetch a subject by id or return 404.
async fn ensure_subject(pool: &sqlx::PgPool, id: DbId) -> AppResult<Subject> {
    SubjectRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Subject",
            id,
        }))
}

// ---------------------------------------------------------------------------
// Viewer (public)
// ---------------------------------------------------------------------------

/// GET /subjects
///
/// List all subjects, ordered by name.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let subjects = SubjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: subjects }))
}

/// GET /subjects/{id}?page=
///
/// A subject together with its videos, ordered by display number and
/// paginated at [`SUBJECT_VIDEOS_PAGE_SIZE`].
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let subject = ensure_subject(&state.pool, id).await?;
    let videos = VideoRepo::list_by_subject(&state.pool, id).await?;

    let requested = paging::parse_page(params.page.as_deref());
    let videos = paging::paginate(videos, SUBJECT_VIDEOS_PAGE_SIZE, requested);

    Ok(Json(DataResponse {
        data: SubjectDetail { subject, videos },
    }))
}

// ---------------------------------------------------------------------------
// Admin CRUD
// ---------------------------------------------------------------------------

/// GET /admin/subjects
pub async fn admin_list(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let subjects = SubjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: subjects }))
}

/// POST /admin/subjects
pub async fn create(
    admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<SubjectInput>,
) -> AppResult<impl IntoResponse> {
    validate_subject_name(&input.name).map_err(AppError::Core)?;

    let subject = SubjectRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = admin.user_id,
        subject_id = subject.id,
        name = %subject.name,
        "Subject created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: subject })))
}

/// GET /admin/subjects/{id}
pub async fn get_by_id(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let subject = ensure_subject(&state.pool, id).await?;
    Ok(Json(DataResponse { data: subject }))
}

/// PUT /admin/subjects/{id}
///
/// Full-record replacement.
pub async fn update(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SubjectInput>,
) -> AppResult<impl IntoResponse> {
    validate_subject_name(&input.name).map_err(AppError::Core)?;

    let subject = SubjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Subject",
            id,
        }))?;

    tracing::info!(user_id = admin.user_id, subject_id = id, "Subject updated");

    Ok(Json(DataResponse { data: subject }))
}

/// DELETE /admin/subjects/{id}
///
/// Removes the subject and all of its videos in one transaction.
pub async fn delete(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SubjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Subject",
            id,
        }));
    }

    tracing::info!(user_id = admin.user_id, subject_id = id, "Subject deleted");

    Ok(StatusCode::NO_CONTENT)
}
