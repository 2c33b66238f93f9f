//! Authentication API integration tests
//!
//! Tests for registration, login, and the current-user endpoint.

use axum::http::StatusCode;
use chrono::Duration;
use pretty_assertions::assert_eq;
use serde_json::json;
use socialnet::backend::auth::CredentialStore;
use uuid::Uuid;

use crate::common::{generate_test_token, token_from, TestApp, TEST_PASSWORD};

#[tokio::test]
async fn test_register_then_get_me() {
    let app = TestApp::new();
    let token = app.register("a@x.com", TEST_PASSWORD).await;

    let response = app.get("/api/auth", Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "a@x.com");
    assert_eq!(response.body["name"], "Test User");
    assert!(response.body["id"].as_str().and_then(|id| Uuid::parse_str(id).ok()).is_some());
    assert!(response.body.get("created_at").is_some());
    assert!(response.body.get("password_hash").is_none());
    assert!(response.body.get("password").is_none());
}

#[tokio::test]
async fn test_register_stores_hash_not_password() {
    let app = TestApp::new();
    app.register("a@x.com", TEST_PASSWORD).await;

    let identity = app.store.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_ne!(identity.password_hash, TEST_PASSWORD);
    assert!(identity.password_hash.starts_with("$2b$04$"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    app.register("a@x.com", TEST_PASSWORD).await;

    let response = app
        .post_json("/api/users", json!({ "email": "a@x.com", "password": "different1" }))
        .await;
    crate::assert_single_error!(response, StatusCode::BAD_REQUEST, "User already exists!");
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_register_duplicate_differs_only_in_case() {
    let app = TestApp::new();
    app.register("a@x.com", TEST_PASSWORD).await;

    let response = app
        .post_json("/api/users", json!({ "email": " A@X.COM ", "password": TEST_PASSWORD }))
        .await;
    crate::assert_single_error!(response, StatusCode::BAD_REQUEST, "User already exists!");
}

#[tokio::test]
async fn test_register_validation_errors() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/users", json!({ "email": "not-an-email", "password": "123" }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({
            "errors": [
                { "msg": "Please include a valid email", "param": "email" },
                { "msg": "Please enter a password with 6 or more characters", "param": "password" }
            ]
        })
    );
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::new();
    let response = app.post_json("/api/users", json!({})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_malformed_json_body() {
    let app = TestApp::new();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"email\": "))
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0]["msg"].is_string());
}

#[tokio::test]
async fn test_missing_content_type() {
    let app = TestApp::new();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/auth")
        .body(axum::body::Body::from(
            json!({ "email": "a@x.com", "password": TEST_PASSWORD }).to_string(),
        ))
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["errors"].is_array());
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    app.register("a@x.com", TEST_PASSWORD).await;

    let response = app.login("A@x.com", TEST_PASSWORD).await;
    assert_eq!(response.status, StatusCode::OK);

    let me = app.get("/api/auth", Some(&token_from(&response))).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["email"], "a@x.com");
}

#[tokio::test]
async fn test_password_past_bcrypt_limit() {
    let app = TestApp::new();
    let prefix = "x".repeat(72);

    let response = app
        .post_json(
            "/api/users",
            json!({ "email": "a@x.com", "password": format!("{prefix}real") }),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"][0]["param"], "password");

    app.register("a@x.com", &prefix).await;
    let response = app.login("a@x.com", &format!("{prefix}attacker")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"][0]["param"], "password");

    assert_eq!(app.login("a@x.com", &prefix).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.register("a@x.com", TEST_PASSWORD).await;

    let wrong_password = app.login("a@x.com", "wrong-password").await;
    let unknown_email = app.login("nobody@x.com", TEST_PASSWORD).await;

    crate::assert_single_error!(wrong_password, StatusCode::BAD_REQUEST, "Invalid Credentials!");
    assert_eq!(wrong_password.status, unknown_email.status);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_login_requires_password() {
    let app = TestApp::new();
    let response = app.login("a@x.com", "").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "errors": [{ "msg": "Password is required", "param": "password" }] })
    );
}

#[tokio::test]
async fn test_get_me_without_token() {
    let app = TestApp::new();
    let response = app.get("/api/auth", None).await;
    crate::assert_single_error!(response, StatusCode::UNAUTHORIZED, "No token, authorization denied");
}

#[tokio::test]
async fn test_get_me_wrong_scheme() {
    let app = TestApp::new();
    let request = axum::http::Request::builder()
        .uri("/api/auth")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.send(request).await;
    crate::assert_single_error!(response, StatusCode::UNAUTHORIZED, "No token, authorization denied");
}

#[tokio::test]
async fn test_token_failures_share_one_response() {
    let app = TestApp::new();
    app.register("a@x.com", TEST_PASSWORD).await;
    let subject = app.store.find_by_email("a@x.com").await.unwrap().unwrap().id;

    let garbage = app.get("/api/auth", Some("garbage")).await;
    let expired = app
        .get("/api/auth", Some(&generate_test_token(subject, Duration::seconds(-1))))
        .await;
    let forged = socialnet::backend::auth::sessions::TokenIssuer::new("attacker-secret")
        .unwrap()
        .issue(subject, Duration::hours(1))
        .unwrap();
    let forged = app.get("/api/auth", Some(&forged)).await;

    for response in [&garbage, &expired, &forged] {
        crate::assert_single_error!(response, StatusCode::UNAUTHORIZED, "Token is not valid");
    }
}

#[tokio::test]
async fn test_token_for_removed_identity() {
    let app = TestApp::new();
    let token = app.register("a@x.com", TEST_PASSWORD).await;
    let identity = app.store.find_by_email("a@x.com").await.unwrap().unwrap();

    app.store.remove(identity.id).await;

    let response = app.get("/api/auth", Some(&token)).await;
    crate::assert_single_error!(response, StatusCode::BAD_REQUEST, "Invalid Credentials!");
}

#[tokio::test]
async fn test_token_for_unknown_subject() {
    let app = TestApp::new();
    let token = generate_test_token(Uuid::new_v4(), Duration::hours(1));

    let response = app.get("/api/auth", Some(&token)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registration_single_winner() {
    let app = TestApp::new();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                app.post_json(
                    "/api/users",
                    json!({ "email": "race@x.com", "password": TEST_PASSWORD }),
                )
                .await
                .status
            })
        })
        .collect();

    let mut ok = 0;
    for handle in handles {
        match handle.await.unwrap() {
            StatusCode::OK => ok += 1,
            StatusCode::BAD_REQUEST => {}
            other => panic!("unexpected status {other}"),
        }
    }

    assert_eq!(ok, 1);
    assert_eq!(app.store.len().await, 1);
}
