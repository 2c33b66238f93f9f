//! Shared Module
//!
//! This module contains types that are shared between the HTTP layer, the
//! auth core and the process bootstrap. Everything here is plain data:
//! serializable error payloads and the application configuration.

/// Shared error types and wire error payloads
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::{ErrorBody, ErrorEntry, SharedError};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
