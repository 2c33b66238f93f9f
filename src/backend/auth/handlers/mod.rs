//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//! Handlers are thin: they extract the request, call `AuthService`, and
//! map the outcome to JSON. Every failure is an `AuthError`, which renders
//! itself as `{"errors": [...]}` with the matching status code.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types, input validation
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST {prefix}/users - User registration
//! - **`login`** - POST {prefix}/auth - User authentication
//! - **`get_me`** - GET {prefix}/auth - Get current user info (bearer token required)
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email and password validated → identity created → token returned
//! 2. **Login**: email and password validated → credentials verified → token returned
//! 3. **Get Me**: auth middleware verifies the token → identity returned
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use axum::{routing::post, Router};
//! use socialnet::backend::auth::{handlers::{login, signup}, AuthService};
//!
//! # fn example(service: Arc<AuthService>) {
//! let router: Router = Router::new()
//!     .route("/api/users", post(signup))
//!     .route("/api/auth", post(login))
//!     .with_state(service);
//! # }
//! ```

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginRequest, SignupRequest, TokenResponse, UserResponse};

// Re-export handlers
pub use login::login;
pub use me::get_me;
pub use signup::signup;
