/**
 * Get Current User Handler
 *
 * This module implements the handler for GET {prefix}/auth, which returns
 * the identity behind the caller's bearer token.
 *
 * The route is wrapped in the auth middleware, which verifies the token and
 * attaches an `AuthContext`; this handler only loads and shapes the record.
 * The password hash never leaves the server.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "email": "ada@example.com",
///   "name": "Ada",
///   "created_at": "2024-01-01T00:00:00Z"
/// }
/// ```
pub async fn get_me(
    State(auth): State<Arc<AuthService>>,
    AuthUser(context): AuthUser,
) -> Result<Json<UserResponse>, AuthError> {
    let identity = auth.current_identity(&context).await?;
    Ok(Json(UserResponse::from(identity)))
}
