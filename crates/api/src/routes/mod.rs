//! Route tree for the API.

pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, dashboard, subject, video};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// GET    /subjects                      viewer: list subjects (public)
/// GET    /subjects/{id}                 viewer: subject + paginated videos
/// GET    /videos/{id}/play              viewer: video + embed link
///
/// POST   /auth/login                    login (public)
/// POST   /auth/logout                   logout (requires auth)
///
/// GET    /admin/dashboard               counts + recent videos
/// GET    /admin/subjects                list
/// POST   /admin/subjects                create
/// GET    /admin/subjects/{id}           get
/// PUT    /admin/subjects/{id}           update (full record)
/// DELETE /admin/subjects/{id}           delete (cascades to videos)
/// GET    /admin/videos                  paginated list
/// POST   /admin/videos                  create
/// GET    /admin/videos/{id}             get
/// PUT    /admin/videos/{id}             update (full record)
/// DELETE /admin/videos/{id}             delete
/// ```
pub fn api_routes() -> Router<AppState> {
    let subject_routes = Router::new()
        .route("/", get(subject::admin_list).post(subject::create))
        .route(
            "/{id}",
            get(subject::get_by_id)
                .put(subject::update)
                .delete(subject::delete),
        );

    let video_routes = Router::new()
        .route("/", get(video::admin_list).post(video::create))
        .route(
            "/{id}",
            get(video::get_by_id)
                .put(video::update)
                .delete(video::delete),
        );

    let admin_routes = Router::new()
        .route("/dashboard", get(dashboard::summary))
        .nest("/subjects", subject_routes)
        .nest("/videos", video_routes);

    Router::new()
        .route("/subjects", get(subject::list))
        .route("/subjects/{id}", get(subject::detail))
        .route("/videos/{id}/play", get(video::play))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .nest("/admin", admin_routes)
}
