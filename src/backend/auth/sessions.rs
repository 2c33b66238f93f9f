/**
 * Session Tokens
 *
 * This module handles JWT token generation and validation. Tokens are
 * HS256-signed and carry the subject id plus issue and expiry times.
 *
 * The signing secret is handed in once at startup; the issuer and verifier
 * keep only the derived keys and never expose or print them.
 *
 * # Verification Order
 *
 * 1. Signature against the process secret → `InvalidSignature`
 * 2. Structure and claims → `MalformedToken`
 * 3. Expiry (`now >= exp`) → `Expired`
 */

use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::error::AuthError;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity ID)
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

fn require_secret(secret: &str) -> Result<(), AuthError> {
    if secret.is_empty() {
        return Err(AuthError::SigningError(
            "signing secret is not configured".to_string(),
        ));
    }
    Ok(())
}

/// Creates signed, time-bounded bearer tokens
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
}

impl TokenIssuer {
    /// Create an issuer from the process secret
    ///
    /// # Errors
    ///
    /// `AuthError::SigningError` if the secret is empty. Callers treat this
    /// as fatal at startup.
    pub fn new(secret: &str) -> Result<Self, AuthError> {
        require_secret(secret)?;
        Ok(Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
        })
    }

    /// Issue a token for `subject_id` that expires `ttl` from now
    pub fn issue(&self, subject_id: Uuid, ttl: Duration) -> Result<String, AuthError> {
        self.issue_at(subject_id, ttl, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    ///
    /// A negative `ttl` yields a token that is already expired.
    pub fn issue_at(
        &self,
        subject_id: Uuid,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AuthError::SigningError("token expiry out of range".to_string()))?;

        let claims = Claims {
            sub: subject_id.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.key)
            .map_err(|e| AuthError::SigningError(e.to_string()))
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer").finish_non_exhaustive()
    }
}

/// Validates bearer tokens issued with the same secret
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Result<Self, AuthError> {
        require_secret(secret)?;

        // Expiry is checked here rather than by jsonwebtoken so that it runs
        // strictly after signature and structure, with no leeway.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        Ok(Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Verify a token and return its subject id
    pub fn verify(&self, token: &str) -> Result<Uuid, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid, AuthError> {
        let data = decode::<Claims>(token, &self.key, &self.validation).map_err(classify)?;

        let subject_id =
            Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::MalformedToken)?;

        if now.timestamp() >= data.claims.exp {
            return Err(AuthError::Expired);
        }

        Ok(subject_id)
    }
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier").finish_non_exhaustive()
    }
}

fn classify(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => AuthError::InvalidSignature,
        _ => AuthError::MalformedToken,
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// A missing header, a non-UTF-8 value, another scheme, or an empty token
/// all count as no credentials at all.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MissingCredentials)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MissingCredentials);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(token)
}
