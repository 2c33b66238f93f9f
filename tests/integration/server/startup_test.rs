//! Startup tests through `create_app`, without a database

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use socialnet::backend::error::StartupError;
use socialnet::backend::server::create_app;
use socialnet::shared::AppConfig;
use tower::ServiceExt;

use crate::common::{test_config, TEST_SECRET};

#[tokio::test]
async fn test_create_app_without_database() {
    let app = crate::assert_ok!(create_app(test_config()).await, "app starts");

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .uri("/")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_app_unreachable_database_is_fatal() {
    let config = AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .database_url("not-a-database-url")
        .build()
        .unwrap();

    crate::assert_err!(create_app(config).await.map(|_| ()), StartupError::Database(_));
}

#[test]
fn test_config_requires_secret() {
    let result = AppConfig::builder().build();
    assert_eq!(
        result.map(|_| ()).map_err(|e| e.to_string()),
        Err("missing value: jwt_secret".to_string())
    );
}
