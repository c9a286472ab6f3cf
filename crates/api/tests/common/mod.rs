//! Shared test harness: router construction and HTTP request helpers.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use souk_api::auth::jwt::JwtConfig;
use souk_api::config::ServerConfig;
use souk_api::router::build_app_router;
use souk_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through the same [`build_app_router`] as `main.rs`, so
/// integration tests exercise the production middleware stack (CORS,
/// request ID, timeout, tracing, panic recovery).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a single request through the router.
///
/// `headers` lets tests attach `Authorization`, `X-Cart-Token`, and friends
/// without a builder type per combination.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    headers: &[(&str, &str)],
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request construction should succeed");

    app.oneshot(request).await.expect("request should complete")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, &[]).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let auth = format!("Bearer {token}");
    send(app, Method::GET, uri, None, &[("authorization", auth.as_str())]).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), &[]).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let auth = format!("Bearer {token}");
    send(
        app,
        Method::POST,
        uri,
        Some(body),
        &[("authorization", auth.as_str())],
    )
    .await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collection should succeed")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// Sign up a user via the API and return the parsed auth response
/// (`access_token`, `refresh_token`, `user`).
pub async fn signup_user(app: Router, username: &str) -> serde_json::Value {
    let body = serde_json::json!({
        "username": username,
        "email": format!("{username}@test.com"),
        "password": "test_password_123!",
    });
    let response = post_json(app, "/api/v1/auth/signup", body).await;
    assert_eq!(
        response.status(),
        axum::http::StatusCode::CREATED,
        "signup should succeed"
    );
    body_json(response).await
}

/// Sign up a user and immediately upgrade them to a vendor. Returns the
/// auth response from become-vendor, whose token carries the vendor role.
pub async fn signup_vendor(app: Router, username: &str) -> serde_json::Value {
    let signup = signup_user(app.clone(), username).await;
    let token = signup["access_token"].as_str().expect("access_token");

    let response = post_json_auth(
        app,
        "/api/v1/account/become-vendor",
        serde_json::json!({}),
        token,
    )
    .await;
    assert_eq!(
        response.status(),
        axum::http::StatusCode::OK,
        "become-vendor should succeed"
    );
    body_json(response).await
}

/// Create a category directly through the repository layer.
pub async fn seed_category(pool: &PgPool, title: &str, slug: &str) -> souk_db::models::category::Category {
    souk_db::repositories::CategoryRepo::create(
        pool,
        &souk_db::models::category::CreateCategory {
            title: title.to_string(),
            slug: slug.to_string(),
        },
    )
    .await
    .expect("category creation should succeed")
}
