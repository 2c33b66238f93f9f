//! Socialnet - Main Library
//!
//! Socialnet is the backend of a small social-networking service. This crate
//! carries its account surface: registration, login, bearer-token
//! authorization, and the "who am I" lookup that protected routes build on.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that cross the wire or the process boundary
//!   - Error payloads returned to clients
//!   - Application configuration (`AppConfig`, builder, file sections)
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, router and middleware
//!   - Credential store (PostgreSQL or in-memory)
//!   - Password hashing (bcrypt) and JWT issue/verify
//!   - `AuthService`, which composes the pieces into register/login/authorize
//!
//! # Usage
//!
//! ```rust,no_run
//! use socialnet::backend::server::{config::load_config, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `backend::error::AuthError` - every failure an auth flow can end in,
//!   convertible into an HTTP response
//! - `backend::auth::users::StoreError` - persistence failures
//! - `shared::config::ConfigError` - startup configuration failures

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
