/**
 * Backend Error Types
 *
 * This module defines the errors an authentication flow can end in, plus
 * the startup errors that abort the process before it serves requests.
 *
 * # Error Categories
 *
 * ## Client errors
 *
 * Caused by the request itself: invalid input, an email that is already
 * registered, wrong credentials, or a missing/invalid bearer token.
 *
 * ## Server errors
 *
 * Persistence, signing and hashing failures. Their detail string is kept
 * for logging; clients only ever see "Server Error".
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::users::StoreError;
use crate::shared::config::ConfigError;
use crate::shared::SharedError;

/// Message returned for every token failure, whatever the cause
pub const INVALID_TOKEN_MESSAGE: &str = "Token is not valid";
/// Message returned when no bearer token accompanies a protected request
pub const MISSING_TOKEN_MESSAGE: &str = "No token, authorization denied";
/// Message returned for wrong email or wrong password alike
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid Credentials!";
/// Message returned when registering an email that already exists
pub const DUPLICATE_IDENTITY_MESSAGE: &str = "User already exists!";
/// Message returned for all internal failures
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

/// Authentication and authorization errors
///
/// Every register, login and authorize call ends either in success or in
/// exactly one of these variants. The token variants stay distinct here so
/// callers and tests can tell them apart, even though they share one
/// client-facing message.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The request body failed validation, field by field
    #[error("invalid input ({} problem(s))", .0.len())]
    InvalidInput(Vec<SharedError>),

    /// An identity with this email already exists
    #[error("identity already exists")]
    DuplicateIdentity,

    /// Unknown email, wrong password, or a token whose subject is gone
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No usable `Authorization: Bearer` header
    #[error("missing credentials")]
    MissingCredentials,

    /// Token signature did not verify against the process secret
    #[error("invalid token signature")]
    InvalidSignature,

    /// Token verified but its structure or claims are unusable
    #[error("malformed token")]
    MalformedToken,

    /// Token expiry has passed
    #[error("token expired")]
    Expired,

    /// The credential store failed
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// Token signing failed or no signing secret is configured
    #[error("signing error: {0}")]
    SigningError(String),

    /// Password hashing failed
    #[error("hashing error: {0}")]
    Hashing(String),
}

impl AuthError {
    /// Shorthand for a single-field validation failure
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput(vec![SharedError::validation(field, message)])
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::DuplicateIdentity | Self::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            Self::MissingCredentials
            | Self::InvalidSignature
            | Self::MalformedToken
            | Self::Expired => StatusCode::UNAUTHORIZED,
            Self::PersistenceError(_) | Self::SigningError(_) | Self::Hashing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether the failure was caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// The message shown to clients
    ///
    /// Never includes internal detail, and never distinguishes tampering
    /// from expiry or a wrong email from a wrong password.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "Invalid input",
            Self::DuplicateIdentity => DUPLICATE_IDENTITY_MESSAGE,
            Self::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE,
            Self::MissingCredentials => MISSING_TOKEN_MESSAGE,
            Self::InvalidSignature | Self::MalformedToken | Self::Expired => INVALID_TOKEN_MESSAGE,
            Self::PersistenceError(_) | Self::SigningError(_) | Self::Hashing(_) => {
                SERVER_ERROR_MESSAGE
            }
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => Self::DuplicateIdentity,
            StoreError::Backend(message) => Self::PersistenceError(message),
        }
    }
}

/// Errors that abort startup
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("auth setup failed: {0}")]
    Auth(#[from] AuthError),
}
