/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` trait for Axum state extraction.
 *
 * `AppState` is cloned per request; everything in it sits behind an `Arc`
 * and is immutable after startup, so no locking is needed here. Mutable
 * data lives in the credential store.
 *
 * # Example
 *
 * ```rust
 * use std::sync::Arc;
 * use axum::extract::State;
 * use socialnet::backend::AuthService;
 *
 * async fn handler(State(auth): State<Arc<AuthService>>) {
 *     let _ttl = auth.token_ttl();
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::users::CredentialStore;
use crate::backend::error::AuthError;
use crate::shared::AppConfig;

/// Central state container for the Axum application
#[derive(Clone)]
pub struct AppState {
    /// Auth orchestrator shared by handlers and middleware
    pub auth: Arc<AuthService>,

    /// Validated configuration the server was started with
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build the state from a validated configuration and a credential store
    ///
    /// # Errors
    ///
    /// Propagates `AuthService::new` failures (empty secret, bad bcrypt cost).
    pub fn new(config: AppConfig, store: Arc<dyn CredentialStore>) -> Result<Self, AuthError> {
        let auth = AuthService::new(store, &config.auth)?;
        Ok(Self {
            auth: Arc::new(auth),
            config: Arc::new(config),
        })
    }
}

/// Lets handlers extract `State<Arc<AuthService>>` directly
impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
