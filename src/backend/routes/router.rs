/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - `CorsLayer::permissive()` - any origin may call the API
 * - `TraceLayer` - one span per HTTP request
 *
 * Unknown routes get a JSON 404 in the same `{"errors": [...]}` shape as
 * every other failure.
 */

use axum::{http::StatusCode, response::Json, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use crate::shared::ErrorBody;

/// Create the Axum router with all routes configured
///
/// 1. **Liveness**: `GET /`
/// 2. **API Routes**: registration, login, current user
/// 3. **Fallback Handler**: JSON 404
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(api_running));

    // Add API routes
    let router = configure_api_routes(router, &app_state);

    router
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn api_running() -> &'static str {
    "API Running"
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::single("Not Found")))
}
