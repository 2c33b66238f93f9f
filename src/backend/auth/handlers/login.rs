/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST {prefix}/auth.
 *
 * # Authentication Process
 *
 * 1. Validate email format and password presence
 * 2. Look up the identity by normalized email
 * 3. Verify password using bcrypt
 * 4. Return a fresh signed token
 *
 * An unknown email and a wrong password produce the same
 * `400 Invalid Credentials!` response.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Invalid body, failed validation, or invalid credentials
/// * `500 Internal Server Error` - Store, hashing, or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "ada@example.com", "password": "secret123" }
/// ```
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AuthError> {
    let Json(request) = payload?;
    tracing::info!("Login request for: {}", request.email);

    let token = auth.login(&request).await?;
    Ok(Json(TokenResponse { token }))
}
