/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers, and the input validation applied to requests
 * before any store or hashing work happens.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::password::{MAX_PASSWORD_BYTES, PASSWORD_TOO_LONG_MESSAGE};
use crate::backend::auth::users::Identity;
use crate::backend::error::AuthError;
use crate::shared::SharedError;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Sign up request
///
/// Missing fields deserialize as empty so they are reported by validation
/// rather than as a body parse failure.
#[derive(Deserialize, Serialize, Default, Clone)]
#[serde(default)]
pub struct SignupRequest {
    /// Optional display name
    pub name: Option<String>,
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

impl SignupRequest {
    /// Validate every field, collecting all failures
    pub fn validate(&self) -> Result<(), AuthError> {
        let mut errors = Vec::new();
        if !is_valid_email(&self.email) {
            errors.push(SharedError::validation("email", "Please include a valid email"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push(SharedError::validation(
                "password",
                format!("Please enter a password with {MIN_PASSWORD_LENGTH} or more characters"),
            ));
        } else if self.password.len() > MAX_PASSWORD_BYTES {
            errors.push(SharedError::validation("password", PASSWORD_TOO_LONG_MESSAGE));
        }
        finish(errors)
    }

    /// Display name with surrounding whitespace removed, if any is left
    pub fn display_name(&self) -> Option<String> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Login request
#[derive(Deserialize, Serialize, Default, Clone)]
#[serde(default)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), AuthError> {
        let mut errors = Vec::new();
        if !is_valid_email(&self.email) {
            errors.push(SharedError::validation("email", "Please include a valid email"));
        }
        if self.password.is_empty() {
            errors.push(SharedError::validation("password", "Password is required"));
        } else if self.password.len() > MAX_PASSWORD_BYTES {
            errors.push(SharedError::validation("password", PASSWORD_TOO_LONG_MESSAGE));
        }
        finish(errors)
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn finish(errors: Vec<SharedError>) -> Result<(), AuthError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AuthError::InvalidInput(errors))
    }
}

/// Token response, returned by register and login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    pub token: String,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Identity> for UserResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email,
            name: identity.name,
            created_at: identity.created_at,
        }
    }
}

/// Case-normalize an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic syntactic email check: `local@domain.tld`, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
