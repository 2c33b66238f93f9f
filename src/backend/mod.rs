//! Backend Module
//!
//! This module contains all server-side code for the socialnet API: the
//! Axum HTTP server, the authentication core, and the persistence adapters
//! it runs on.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration loading, application state, startup
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Identity store, password hashing, JWT tokens, `AuthService`
//! - **`middleware`** - Bearer-token gate and the authenticated-user extractor
//! - **`error`** - `AuthError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Config, state and initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication core and handlers
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds an `Arc<AuthService>` and the immutable `AppConfig`.
//! The signing secret lives inside the service's token issuer/verifier and
//! is read-only after startup, so requests share it without locking. The
//! only mutable shared state is the credential store, which owns its own
//! synchronization (connection pool or `RwLock`).

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use server::create_app;
pub use error::AuthError;
pub use auth::service::{AuthContext, AuthService};
