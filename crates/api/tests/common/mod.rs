//! Shared harness for HTTP-level integration tests.
//!
//! Builds the production router via `build_app_router` so tests exercise
//! the same middleware stack (CORS, request ID, timeout, tracing, panic
//! recovery) that the binary uses, and drives it with
//! `tower::ServiceExt::oneshot` -- no TCP listener involved.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use courseware_api::auth::jwt::{generate_access_token, JwtConfig};
use courseware_api::auth::password::hash_password;
use courseware_api::config::ServerConfig;
use courseware_api::router::build_app_router;
use courseware_api::state::AppState;
use courseware_db::models::subject::{Subject, SubjectInput};
use courseware_db::models::video::{Video, VideoInput};
use courseware_db::repositories::{SubjectRepo, UserRepo, VideoRepo};

/// Password used for every seeded admin user.
pub const TEST_ADMIN_PASSWORD: &str = "integration-test-password";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Seed an admin user and return a valid access token for it.
pub async fn seed_admin(pool: &PgPool) -> String {
    let hash = hash_password(TEST_ADMIN_PASSWORD).expect("hashing test password");
    let user = UserRepo::create(pool, "admin", &hash)
        .await
        .expect("seeding admin user");
    generate_access_token(user.id, &user.username, &test_config().jwt)
        .expect("generating test token")
}

/// Seed a subject directly through the repository.
pub async fn seed_subject(pool: &PgPool, name: &str) -> Subject {
    SubjectRepo::create(
        pool,
        &SubjectInput {
            name: name.to_string(),
            description: None,
        },
    )
    .await
    .expect("seeding subject")
}

/// Seed a video directly through the repository.
pub async fn seed_video(pool: &PgPool, subject_id: i64, number: i32, title: &str) -> Video {
    VideoRepo::create(
        pool,
        &VideoInput {
            subject_id,
            number,
            title: title.to_string(),
            description: None,
            link: format!("https://drive.google.com/file/d/FILE{number}/view?usp=sharing"),
        },
    )
    .await
    .expect("seeding video")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("building request");

    app.oneshot(request).await.expect("sending request")
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collecting body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("parsing body as JSON")
}
