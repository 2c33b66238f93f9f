//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer token middleware for protected routes, plus the
//!   `AuthUser` extractor handlers use to read the authenticated caller
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{handler::Handler, middleware, routing::get, Router};
//! use socialnet::backend::auth::get_me;
//! use socialnet::backend::middleware::auth_middleware;
//! use socialnet::backend::server::AppState;
//!
//! # fn example(state: AppState) {
//! let router: Router<AppState> = Router::new().route(
//!     "/api/auth",
//!     get(get_me.layer(middleware::from_fn_with_state(state.clone(), auth_middleware))),
//! );
//! # }
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthUser};
