//! Shared Error Types
//!
//! This module defines the request-level error types and the JSON payload
//! that carries them back to clients.
//!
//! # Error Categories
//!
//! - `SerializationError` - the request body could not be parsed
//! - `ValidationError` - a single field failed validation
//!
//! # Wire Format
//!
//! Every failed request is answered with the same body shape:
//!
//! ```json
//! { "errors": [ { "msg": "Please include a valid email", "param": "email" } ] }
//! ```
//!
//! `param` is present only for field-level validation failures.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request-level errors reported back to the client field by field
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Convert into the entry shown to clients
    pub fn to_entry(&self) -> ErrorEntry {
        match self {
            Self::SerializationError { message } => ErrorEntry::new(message.clone()),
            Self::ValidationError { field, message } => {
                ErrorEntry::for_field(field.clone(), message.clone())
            }
        }
    }
}

/// One message inside an error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// Human-readable message
    pub msg: String,
    /// Offending request field, for validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl ErrorEntry {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: None,
        }
    }

    pub fn for_field(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: Some(param.into()),
        }
    }
}

/// Error response body: `{"errors": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub errors: Vec<ErrorEntry>,
}

impl ErrorBody {
    /// Body with a single message and no field
    pub fn single(msg: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorEntry::new(msg)],
        }
    }
}

impl From<&[SharedError]> for ErrorBody {
    fn from(errors: &[SharedError]) -> Self {
        Self {
            errors: errors.iter().map(SharedError::to_entry).collect(),
        }
    }
}
