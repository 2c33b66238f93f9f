//! Router-level tests: liveness, fallback, CORS, and prefix configuration

use axum::http::{header, Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use socialnet::shared::AppConfig;

use crate::common::{TestApp, TEST_PASSWORD, TEST_SECRET};

#[tokio::test]
async fn test_root_reports_running() {
    let app = TestApp::new();
    let response = app.get("/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!("API Running"));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new();
    let response = app.get("/api/nope", None).await;
    crate::assert_single_error!(response, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = TestApp::new();
    let request = Request::builder()
        .uri("/")
        .header(header::ORIGIN, "https://frontend.example")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(
        response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_custom_api_prefix() {
    let config = AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .api_prefix("/v2/")
        .build()
        .unwrap();
    let app = TestApp::with_config(config);

    let response = app
        .post_json("/v2/users", json!({ "email": "a@x.com", "password": TEST_PASSWORD }))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let token = response.body["token"].as_str().unwrap().to_string();
    let me = app.get("/v2/auth", Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);

    let old = app.get("/api/auth", Some(&token)).await;
    assert_eq!(old.status, StatusCode::NOT_FOUND);
}
