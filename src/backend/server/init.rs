/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including credential store selection, state creation, and route
 * configuration.
 *
 * # Initialization Process
 *
 * 1. Select the credential store (PostgreSQL or in-memory)
 * 2. Build `AppState`, which constructs the `AuthService`
 * 3. Create and configure the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::users::CredentialStore;
use crate::backend::error::{AuthError, StartupError};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_credential_store;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// * `StartupError::Database` / `StartupError::Migration` - the configured
///   database could not be reached or migrated
/// * `StartupError::Auth` - the auth settings were rejected
pub async fn create_app(config: AppConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing socialnet backend server");

    let store = load_credential_store(&config.database).await?;
    let app = build_app(config, store)?;

    tracing::info!("Router configured");
    Ok(app)
}

/// Build the application over an already-selected credential store
///
/// Tests use this with `InMemoryCredentialStore` to drive the full router
/// without a database.
pub fn build_app(
    config: AppConfig,
    store: Arc<dyn CredentialStore>,
) -> Result<Router<()>, AuthError> {
    let app_state = AppState::new(config, store)?;
    Ok(create_router(app_state))
}
