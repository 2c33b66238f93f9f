/**
 * Identity Model and Credential Store
 *
 * This module defines the stored user identity, the store interface the
 * auth core consumes, and its PostgreSQL implementation.
 *
 * Email uniqueness is the store's job: the orchestrator's
 * lookup-then-save is not atomic, so `save` must reject a second identity
 * with the same email even under concurrent registrations.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

/// A registered user's credential record
#[derive(Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Identity {
    /// Unique identity ID (UUID)
    pub id: Uuid,
    /// Email address, trimmed and lowercased
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Optional display name
    pub name: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// Credential store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// An identity with the same email (or id) already exists
    #[error("identity already exists")]
    Duplicate,

    /// The backing store failed
    #[error("store failure: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::Duplicate;
            }
        }
        Self::Backend(err.to_string())
    }
}

/// Persistence interface consumed by the auth core
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find an identity by its (normalized) email
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError>;

    /// Find an identity by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Identity>, StoreError>;

    /// Persist a new identity
    ///
    /// Returns `StoreError::Duplicate` if the email is already taken. This
    /// check must be atomic with the insert.
    async fn save(&self, identity: Identity) -> Result<Identity, StoreError>;
}

/// PostgreSQL-backed credential store
///
/// Relies on the unique index on `users.email` created by the migrations
/// in `migrations/`.
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError> {
        let identity = sqlx::query_as::<_, Identity>(
            r#"
            SELECT id, email, password_hash, name, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(identity)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Identity>, StoreError> {
        let identity = sqlx::query_as::<_, Identity>(
            r#"
            SELECT id, email, password_hash, name, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(identity)
    }

    async fn save(&self, identity: Identity) -> Result<Identity, StoreError> {
        let identity = sqlx::query_as::<_, Identity>(
            r#"
            INSERT INTO users (id, email, password_hash, name, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, password_hash, name, created_at
            "#,
        )
        .bind(identity.id)
        .bind(&identity.email)
        .bind(&identity.password_hash)
        .bind(&identity.name)
        .bind(identity.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(identity)
    }
}
