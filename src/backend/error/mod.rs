//! Backend Error Module
//!
//! This module defines the error taxonomy of the authentication flows and
//! the way each failure is rendered as an HTTP response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs          - Module exports and documentation
//! ├── types.rs        - AuthError, StartupError
//! └── conversion.rs   - IntoResponse and From conversions
//! ```
//!
//! # Status Mapping
//!
//! - 400: invalid input, duplicate identity, invalid credentials
//! - 401: missing credentials, bad signature, malformed or expired token
//! - 500: persistence, signing and hashing failures
//!
//! Internal detail carried by 500-class errors is logged, never returned.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{AuthError, StartupError};
