/**
 * API Route Handlers
 *
 * This module wires the authentication endpoints under the configured API
 * prefix.
 *
 * # Routes
 *
 * - `POST {prefix}/users` - User registration (public)
 * - `POST {prefix}/auth` - User login (public)
 * - `GET {prefix}/auth` - Get current user info (requires authentication)
 */

use axum::{handler::Handler, middleware, routing::post, Router};

use crate::backend::auth::{get_me, login, signup};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Only `GET {prefix}/auth` runs behind `auth_middleware`; the login route
/// shares its path but stays public, so the middleware is layered onto the
/// handler rather than the route.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let prefix = app_state.config.server.api_prefix.as_str();
    let protected = middleware::from_fn_with_state(app_state.clone(), auth_middleware);

    router
        // Registration
        .route(&format!("{prefix}/users"), post(signup))
        // Login and current user
        .route(
            &format!("{prefix}/auth"),
            post(login).get(get_me.layer(protected)),
        )
}
