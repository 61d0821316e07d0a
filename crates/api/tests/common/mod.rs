#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use cookie::Cookie;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use jobtrack_api::auth::session_token::SessionConfig;
use jobtrack_api::config::ServerConfig;
use jobtrack_api::cookies::{FLASH_COOKIE_NAME, SESSION_COOKIE_NAME};
use jobtrack_api::router::build_app_router;
use jobtrack_api::state::AppState;

pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Build a test `ServerConfig` with safe defaults and a fixed session secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        db_max_connections: 5,
        session: SessionConfig {
            secret: "integration-test-secret".to_string(),
            expiry_hours: 24,
            cookie_secure: false,
        },
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// on the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// GET `uri`, optionally sending a `Cookie` header.
pub async fn get(app: Router, uri: &str, cookies: Option<&str>) -> Response<Body> {
    let mut builder = Request::get(uri);
    if let Some(cookies) = cookies {
        builder = builder.header(COOKIE, cookies);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// POST an urlencoded form to `uri`, optionally sending a `Cookie` header.
pub async fn post_form(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    cookies: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::post(uri).header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookies) = cookies {
        builder = builder.header(COOKIE, cookies);
    }
    app.oneshot(builder.body(Body::from(encode_form(fields))).unwrap())
        .await
        .unwrap()
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("response should redirect")
        .to_str()
        .unwrap()
}

/// Decoded value of the named cookie set by `response`, if any.
pub fn set_cookie_value(response: &Response<Body>, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|raw| Cookie::parse_encoded(raw.to_owned()).ok())
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}

/// The flash notice (`level:message`) a redirect carries.
pub fn flash_of(response: &Response<Body>) -> Option<String> {
    set_cookie_value(response, FLASH_COOKIE_NAME)
}

// ---------------------------------------------------------------------------
// Flows
// ---------------------------------------------------------------------------

pub async fn signup(app: Router, name: &str, email: &str) -> Response<Body> {
    post_form(
        app,
        "/signup",
        &[
            ("name", name),
            ("email", email),
            ("password", TEST_PASSWORD),
            ("confirm_password", TEST_PASSWORD),
        ],
        None,
    )
    .await
}

/// Sign in and return a `Cookie` header value carrying the session.
pub async fn signin(app: Router, email: &str) -> String {
    let response = post_form(
        app,
        "/signin",
        &[("email", email), ("password", TEST_PASSWORD)],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let token = set_cookie_value(&response, SESSION_COOKIE_NAME).expect("session cookie");
    format!("{SESSION_COOKIE_NAME}={token}")
}

/// Register and sign in, returning the session `Cookie` header value.
pub async fn signup_and_signin(app: &Router, name: &str, email: &str) -> String {
    let response = signup(app.clone(), name, email).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    signin(app.clone(), email).await
}
