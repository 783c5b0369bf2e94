//! HTTP-level integration tests for the auth endpoints: login, lockout,
//! token refresh, and logout.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, post_json_auth, TEST_PASSWORD};
use sqlx::PgPool;

async fn login(app: axum::Router, username: &str, password: &str) -> axum::response::Response {
    post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "username": username, "password": password }),
    )
    .await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_tokens_and_user_info(pool: PgPool) {
    let (user, _) = common::seed_instructor(&pool, "ada").await;
    let app = common::build_test_app(pool);

    let response = login(app, "ada", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "ada");
    assert_eq!(json["user"]["role"], "instructor");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_wrong_password_is_401(pool: PgPool) {
    common::seed_student(&pool, "ada").await;
    let app = common::build_test_app(pool);

    let response = login(app, "ada", "not-the-password").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_unknown_user_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = login(app, "ghost", "whatever").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn five_failures_lock_the_account(pool: PgPool) {
    common::seed_student(&pool, "ada").await;
    let app = common::build_test_app(pool);

    for _ in 0..5 {
        let response = login(app.clone(), "ada", "wrong").await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Even the correct password is rejected while locked.
    let response = login(app, "ada", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_rotates_the_refresh_token(pool: PgPool) {
    common::seed_student(&pool, "ada").await;
    let app = common::build_test_app(pool);

    let json = body_json(login(app.clone(), "ada", TEST_PASSWORD).await).await;
    let refresh_token = json["refresh_token"].as_str().unwrap().to_string();

    let response = post_json(
        app.clone(),
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = body_json(response).await;
    assert_ne!(refreshed["refresh_token"].as_str().unwrap(), refresh_token);

    // The spent token no longer works.
    let replay = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(replay.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_with_garbage_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": "not-a-real-token" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_revokes_all_sessions(pool: PgPool) {
    common::seed_student(&pool, "ada").await;
    let app = common::build_test_app(pool);

    let json = body_json(login(app.clone(), "ada", TEST_PASSWORD).await).await;
    let access_token = json["access_token"].as_str().unwrap().to_string();
    let refresh_token = json["refresh_token"].as_str().unwrap().to_string();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/auth/logout",
        &access_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The refresh token died with the session.
    let replay = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(replay.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_requires_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/auth/logout", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
