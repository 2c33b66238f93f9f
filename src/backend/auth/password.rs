/**
 * Password Hashing
 *
 * bcrypt hash and verify. Each hash embeds its own salt and cost, so the
 * configured cost can change without invalidating stored hashes.
 *
 * bcrypt ignores everything past the first 72 bytes of input, so longer
 * passwords are refused outright instead of being silently truncated.
 *
 * Both operations are CPU-bound; async callers run them through
 * `tokio::task::spawn_blocking`.
 */

use std::sync::Arc;

use crate::backend::error::AuthError;

/// Plaintext hashed once at construction so that logins for unknown emails
/// pay the same verify cost as wrong passwords.
const TIMING_DUMMY_PASSWORD: &str = "socialnet-timing-equalizer";

/// Longest password bcrypt hashes without truncation, in bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

pub const PASSWORD_TOO_LONG_MESSAGE: &str = "Password must be at most 72 bytes long";

/// bcrypt password hasher with a fixed work factor
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: Arc<str>,
}

impl PasswordHasher {
    /// Create a hasher for the given bcrypt cost
    ///
    /// # Errors
    ///
    /// `AuthError::Hashing` if bcrypt rejects the cost (outside 4..=31).
    pub fn new(cost: u32) -> Result<Self, AuthError> {
        let dummy_hash = bcrypt::hash(TIMING_DUMMY_PASSWORD, cost)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;
        Ok(Self {
            cost,
            dummy_hash: Arc::from(dummy_hash),
        })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh salt
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidInput` - empty password, or longer than
    ///   `MAX_PASSWORD_BYTES`
    /// * `AuthError::Hashing` - bcrypt failure
    pub fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        if plaintext.is_empty() {
            return Err(AuthError::invalid_field("password", "Password is required"));
        }
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(AuthError::invalid_field("password", PASSWORD_TOO_LONG_MESSAGE));
        }
        bcrypt::hash(plaintext, self.cost).map_err(|e| AuthError::Hashing(e.to_string()))
    }

    /// Check a plaintext password against a stored hash
    ///
    /// Never fails: a mismatch and an unparseable hash both yield `false`.
    /// A password too long to have been hashed never matches, but still
    /// pays for one verify.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            let _ = bcrypt::verify(plaintext, &self.dummy_hash);
            return false;
        }
        match bcrypt::verify(plaintext, hash) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {}", e);
                false
            }
        }
    }

    /// Spend one verify against the dummy hash
    pub fn verify_dummy(&self, plaintext: &str) {
        let _ = self.verify(plaintext, &self.dummy_hash);
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}
