/**
 * Authentication Service
 *
 * Coordinates registration, login and request authorization on top of a
 * `CredentialStore`, the bcrypt `PasswordHasher`, and the token issuer and
 * verifier. Handlers and middleware hold it behind an `Arc`.
 *
 * Login never tells an unknown email apart from a wrong password: both
 * paths run one bcrypt verify and return `InvalidCredentials`.
 */

use std::sync::Arc;

use axum::http::HeaderMap;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::backend::auth::handlers::types::{normalize_email, LoginRequest, SignupRequest};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::{bearer_token, TokenIssuer, TokenVerifier};
use crate::backend::auth::users::{CredentialStore, Identity};
use crate::backend::error::AuthError;
use crate::shared::config::AuthConfig;

/// The authenticated caller, attached to requests by the auth middleware
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub subject_id: Uuid,
    pub email: String,
}

/// Auth orchestrator
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
    token_ttl: Duration,
}

impl AuthService {
    /// Build the service from the auth section of the configuration
    ///
    /// # Errors
    ///
    /// * `AuthError::SigningError` - empty signing secret, or a token
    ///   lifetime out of range
    /// * `AuthError::Hashing` - bcrypt cost out of range
    pub fn new(store: Arc<dyn CredentialStore>, config: &AuthConfig) -> Result<Self, AuthError> {
        let token_ttl = config.token_ttl().ok_or_else(|| {
            AuthError::SigningError(format!(
                "token lifetime out of range: {}s",
                config.token_ttl_secs
            ))
        })?;
        let hasher = PasswordHasher::new(config.bcrypt_cost)?;
        tracing::info!(
            "Auth service ready (bcrypt cost {}, token lifetime {}s)",
            hasher.cost(),
            token_ttl.num_seconds()
        );

        Ok(Self {
            store,
            hasher,
            issuer: TokenIssuer::new(&config.jwt_secret)?,
            verifier: TokenVerifier::new(&config.jwt_secret)?,
            token_ttl,
        })
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Create a new identity and return a token for it
    pub async fn register(&self, request: &SignupRequest) -> Result<String, AuthError> {
        request.validate()?;
        let email = normalize_email(&request.email);

        if self.store.find_by_email(&email).await?.is_some() {
            tracing::warn!("Registration rejected, email already registered: {}", email);
            return Err(AuthError::DuplicateIdentity);
        }

        let password_hash = self.hash_password(request.password.clone()).await?;

        let identity = Identity {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name: request.display_name(),
            created_at: Utc::now(),
        };

        // A concurrent registration can still win between the lookup and
        // here; the store reports that as a duplicate.
        let identity = self.store.save(identity).await?;

        let token = self.issuer.issue(identity.id, self.token_ttl)?;
        tracing::info!("Registered identity {} ({})", identity.id, identity.email);
        Ok(token)
    }

    /// Check credentials and return a fresh token
    pub async fn login(&self, request: &LoginRequest) -> Result<String, AuthError> {
        request.validate()?;
        let email = normalize_email(&request.email);

        let identity = self.store.find_by_email(&email).await?;
        let stored_hash = identity.as_ref().map(|i| i.password_hash.clone());
        let matched = self
            .verify_password(request.password.clone(), stored_hash)
            .await?;

        let identity = match identity {
            Some(identity) if matched => identity,
            _ => {
                tracing::warn!("Login failed for {}", email);
                return Err(AuthError::InvalidCredentials);
            }
        };

        let token = self.issuer.issue(identity.id, self.token_ttl)?;
        tracing::info!("Login succeeded for identity {}", identity.id);
        Ok(token)
    }

    /// Resolve the bearer token in `headers` to the caller's identity
    pub async fn authorize(&self, headers: &HeaderMap) -> Result<AuthContext, AuthError> {
        let token = bearer_token(headers)?;
        self.authorize_token(token).await
    }

    /// Resolve a raw token to the caller's identity
    ///
    /// A valid token whose subject no longer exists is rejected with
    /// `InvalidCredentials`.
    pub async fn authorize_token(&self, token: &str) -> Result<AuthContext, AuthError> {
        let subject_id = self.verifier.verify(token)?;

        let identity = self
            .store
            .find_by_id(subject_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(AuthContext {
            subject_id,
            email: identity.email,
        })
    }

    /// Load the full identity behind an authorized context
    pub async fn current_identity(&self, context: &AuthContext) -> Result<Identity, AuthError> {
        self.store
            .find_by_id(context.subject_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)
    }

    async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?
    }

    /// Verify against `hash`, or against the dummy hash when there is none
    async fn verify_password(
        &self,
        password: String,
        hash: Option<String>,
    ) -> Result<bool, AuthError> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || match hash {
            Some(hash) => hasher.verify(&password, &hash),
            None => {
                hasher.verify_dummy(&password);
                false
            }
        })
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("hasher", &self.hasher)
            .field("token_ttl", &self.token_ttl)
            .finish_non_exhaustive()
    }
}
