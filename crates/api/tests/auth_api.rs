//! HTTP-level integration tests for login and logout.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_auth, post_json, seed_admin, TEST_ADMIN_PASSWORD};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_valid_credentials_returns_a_token(pool: PgPool) {
    seed_admin(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "admin", "password": TEST_ADMIN_PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].as_str().unwrap().contains('.'));
    assert!(json["expires_in"].as_i64().unwrap() > 0);
    assert_eq!(json["user"]["username"], "admin");
    // The hash never leaves the server.
    assert!(json["user"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_token_opens_admin_routes(pool: PgPool) {
    seed_admin(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "admin", "password": TEST_ADMIN_PASSWORD}),
    )
    .await;
    let token = body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let app = common::build_test_app(pool);
    let response = common::get_auth(app, "/api/v1/admin/subjects", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_wrong_password_is_401(pool: PgPool) {
    seed_admin(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "admin", "password": "wrong"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid username or password");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_unknown_username_gives_the_same_message(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "nobody", "password": "anything"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid username or password");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/auth/logout", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_with_token_is_acknowledged(pool: PgPool) {
    let token = seed_admin(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_auth(app, "/api/v1/auth/logout", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
