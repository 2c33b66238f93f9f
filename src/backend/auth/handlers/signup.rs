/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST {prefix}/users.
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Check if an identity with the same email already exists
 * 3. Hash password using bcrypt
 * 4. Store the identity
 * 5. Return a signed token
 *
 * # Validation
 *
 * - Email must be a syntactically valid address
 * - Password must be at least 6 characters long
 * - Email must be unique (compared after trimming and lowercasing)
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{SignupRequest, TokenResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Invalid body, failed validation, or email already registered
/// * `500 Internal Server Error` - Store, hashing, or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/users HTTP/1.1
/// Content-Type: application/json
///
/// { "name": "Ada", "email": "ada@example.com", "password": "secret123" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn signup(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AuthError> {
    let Json(request) = payload?;
    tracing::info!("Signup request for: {}", request.email);

    let token = auth.register(&request).await?;
    Ok(Json(TokenResponse { token }))
}
