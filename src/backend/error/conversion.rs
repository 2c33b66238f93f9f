/**
 * Error Conversion
 *
 * This module provides conversion implementations for backend errors,
 * allowing them to be returned directly from handlers and middleware.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "errors": [ { "msg": "Invalid Credentials!" } ]
 * }
 * ```
 *
 * Validation failures list one entry per offending field, each carrying a
 * `param` naming the field.
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::AuthError;
use crate::shared::{ErrorBody, SharedError};

impl AuthError {
    /// Build the JSON body sent to the client
    pub fn to_body(&self) -> ErrorBody {
        match self {
            Self::InvalidInput(errors) => ErrorBody::from(errors.as_slice()),
            other => ErrorBody::single(other.public_message()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_client_error() {
            tracing::debug!(error = %self, "Request rejected");
        } else {
            tracing::error!(error = %self, "Request failed with internal error");
        }

        (status, Json(self.to_body())).into_response()
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidInput(vec![SharedError::serialization(rejection.body_text())])
    }
}
