/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It resolves the bearer token through `AuthService`
 * and attaches the resulting `AuthContext` to the request extensions.
 *
 * Rejections are rendered by `AuthError`: 401 for a missing, forged,
 * malformed or expired token, 400 when the token's subject no longer exists.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::backend::auth::service::AuthContext;
use crate::backend::error::AuthError;
use crate::backend::server::state::AppState;

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies the token signature and expiry
/// 3. Confirms the token's subject still exists
/// 4. Attaches the `AuthContext` to request extensions for handlers
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let context = app_state
        .auth
        .authorize(request.headers())
        .await
        .inspect_err(|e| tracing::warn!("Request rejected: {}", e))?;

    request.extensions_mut().insert(context);

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated caller
///
/// Only valid on routes behind `auth_middleware`; anywhere else it rejects
/// with `MissingCredentials`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthContext);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthContext not found in request extensions");
                AuthError::MissingCredentials
            })?;

        Ok(AuthUser(context))
    }
}
