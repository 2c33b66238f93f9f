//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-process app over the in-memory credential store
//! - Request helpers driving the router with `tower::ServiceExt::oneshot`
//! - Custom assertion macros
//! - Postgres fixtures for the `#[ignore]`d store tests

pub mod assertions;

// Re-export commonly used utilities
pub use auth_helpers::*;
