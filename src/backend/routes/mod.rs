//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, CORS, tracing, fallback
//! └── api_routes.rs   - Auth API endpoints under the configured prefix
//! ```
//!
//! # Routes
//!
//! - `GET /` - Liveness check
//! - `POST {prefix}/users` - User registration
//! - `POST {prefix}/auth` - User login
//! - `GET {prefix}/auth` - Get current user (bearer token required)
//!
//! The prefix defaults to `/api`.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
