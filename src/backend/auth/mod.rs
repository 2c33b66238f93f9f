//! Authentication Module
//!
//! This module handles user registration, login and bearer-token
//! authorization. It provides HTTP handlers for the account endpoints and
//! the pieces those handlers compose.
//!
//! # Architecture
//!
//! - **`users`** - `Identity` model, `CredentialStore` trait, PostgreSQL store
//! - **`memory_store`** - In-memory `CredentialStore`
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT issue/verify and bearer header parsing
//! - **`service`** - `AuthService`: register, login, authorize
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - Identity model and PostgreSQL store
//! ├── memory_store.rs - In-memory store
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - JWT token management
//! ├── service.rs      - Auth orchestration
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types and validation
//!     ├── signup.rs   - Registration handler
//!     ├── login.rs    - Login handler
//!     └── me.rs       - Current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password → identity stored → token returned
//! 2. **Login**: email + password → hash verified → token returned
//! 3. **Authorize**: bearer token → signature, structure, expiry checked →
//!    subject resolved in the store → `AuthContext` attached to the request
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt; the cost is embedded in each hash
//! - Unknown email and wrong password are indistinguishable to clients
//! - Tokens are HS256 JWTs signed with a secret injected at startup
//! - Passwords, hashes, tokens and the secret are never logged

/// Identity model and PostgreSQL credential store
pub mod users;

/// In-memory credential store
pub mod memory_store;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Authentication orchestration
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, SignupRequest, TokenResponse, UserResponse};
pub use handlers::{get_me, login, signup};
pub use memory_store::InMemoryCredentialStore;
pub use service::{AuthContext, AuthService};
pub use users::{CredentialStore, Identity, PgCredentialStore, StoreError};
