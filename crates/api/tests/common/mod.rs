//! Shared harness for HTTP-level integration tests.
//!
//! Mirrors the router construction in `main.rs` (same middleware stack)
//! with a test configuration and an in-process catalog cache, and bundles
//! the request/seeding helpers the test files share.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use scherzo_api::auth::jwt::{generate_access_token, JwtConfig};
use scherzo_api::auth::password::hash_password;
use scherzo_api::config::ServerConfig;
use scherzo_api::routes;
use scherzo_api::state::AppState;
use scherzo_core::types::DbId;
use scherzo_db::cache::{Cache, MemoryCache};
use scherzo_db::models::user::{CreateUser, User};
use scherzo_db::repositories::{RoleRepo, UserRepo};

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        redis_url: None,
        cache_ttl_secs: 900,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and a fresh in-process cache.
///
/// The returned router is `Clone`; clone it per request to keep state
/// (notably the cache) shared across requests in one test.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let cache = Cache::new(
        Arc::new(MemoryCache::default()),
        Duration::from_secs(config.cache_ttl_secs),
    );

    let state = AppState {
        pool,
        config: Arc::new(config),
        cache,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
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
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(json)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    json: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(json)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    json: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(json)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seeding helpers
// ---------------------------------------------------------------------------

/// Password used for all seeded test users.
pub const TEST_PASSWORD: &str = "a-long-enough-password";

/// Create a user with the given role directly in the database.
pub async fn seed_user(pool: &PgPool, username: &str, role_name: &str) -> User {
    let role = RoleRepo::find_by_name(pool, role_name)
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("role {role_name:?} is seeded by migrations"));
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: hashed,
            role_id: role.id,
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Mint a valid access token for a seeded user, bypassing the login
/// endpoint.
pub fn token_for(user_id: DbId, role: &str) -> String {
    generate_access_token(user_id, role, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Seed an instructor and return `(user, bearer token)`.
pub async fn seed_instructor(pool: &PgPool, username: &str) -> (User, String) {
    let user = seed_user(pool, username, "instructor").await;
    let token = token_for(user.id, "instructor");
    (user, token)
}

/// Seed a student and return `(user, bearer token)`.
pub async fn seed_student(pool: &PgPool, username: &str) -> (User, String) {
    let user = seed_user(pool, username, "student").await;
    let token = token_for(user.id, "student");
    (user, token)
}

/// Seed an admin and return `(user, bearer token)`.
pub async fn seed_admin(pool: &PgPool, username: &str) -> (User, String) {
    let user = seed_user(pool, username, "admin").await;
    let token = token_for(user.id, "admin");
    (user, token)
}
