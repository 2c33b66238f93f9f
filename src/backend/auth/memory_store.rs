/**
 * In-Memory Credential Store
 *
 * Used when no database is configured and throughout the tests. Both
 * indexes live behind a single `RwLock`, so the duplicate check in `save`
 * and the insert happen under the same write guard.
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::{CredentialStore, Identity, StoreError};

#[derive(Default)]
struct Records {
    by_id: HashMap<Uuid, Identity>,
    by_email: HashMap<String, Uuid>,
}

/// Process-local credential store
#[derive(Default, Clone)]
pub struct InMemoryCredentialStore {
    records: Arc<RwLock<Records>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored identities
    pub async fn len(&self) -> usize {
        self.records.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop an identity. Tokens issued for it stop authorizing.
    pub async fn remove(&self, id: Uuid) -> Option<Identity> {
        let mut records = self.records.write().await;
        let identity = records.by_id.remove(&id)?;
        records.by_email.remove(&identity.email);
        Some(identity)
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .by_email
            .get(email)
            .and_then(|id| records.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Identity>, StoreError> {
        Ok(self.records.read().await.by_id.get(&id).cloned())
    }

    async fn save(&self, identity: Identity) -> Result<Identity, StoreError> {
        let mut records = self.records.write().await;
        if records.by_email.contains_key(&identity.email) || records.by_id.contains_key(&identity.id) {
            return Err(StoreError::Duplicate);
        }
        records.by_email.insert(identity.email.clone(), identity.id);
        records.by_id.insert(identity.id, identity.clone());
        Ok(identity)
    }
}
