//! PostgreSQL credential store tests

use std::sync::Arc;

use chrono::Utc;
use socialnet::backend::auth::{
    AuthService, CredentialStore, Identity, PgCredentialStore, SignupRequest, StoreError,
};
use socialnet::backend::AuthError;
use uuid::Uuid;

use crate::common::database::{create_test_pool, unique_email};
use crate::common::test_config;

fn identity(email: &str) -> Identity {
    Identity {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password_hash: "$2b$04$placeholderplaceholderplaceholderplaceholderplacehol".to_string(),
        name: None,
        created_at: Utc::now(),
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_save_then_find() {
    let store = PgCredentialStore::new(create_test_pool().await);
    let saved = store.save(identity(&unique_email())).await.unwrap();

    let by_email = store.find_by_email(&saved.email).await.unwrap();
    assert_eq!(by_email.map(|i| i.id), Some(saved.id));

    let by_id = store.find_by_id(saved.id).await.unwrap();
    assert_eq!(by_id.map(|i| i.email), Some(saved.email));
}

#[tokio::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_duplicate_email_is_duplicate_error() {
    let store = PgCredentialStore::new(create_test_pool().await);
    let email = unique_email();

    store.save(identity(&email)).await.unwrap();
    let result = store.save(identity(&email)).await;

    assert!(matches!(result, Err(StoreError::Duplicate)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_concurrent_registration_single_winner() {
    let store: Arc<dyn CredentialStore> =
        Arc::new(PgCredentialStore::new(create_test_pool().await));
    let service = Arc::new(AuthService::new(store, &test_config().auth).unwrap());
    let email = unique_email();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            let request = SignupRequest {
                name: None,
                email: email.clone(),
                password: "secret123".to_string(),
            };
            tokio::spawn(async move { service.register(&request).await })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(AuthError::DuplicateIdentity) => {}
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
    assert_eq!(successes, 1);
}
