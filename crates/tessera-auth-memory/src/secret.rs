//! In-memory secret store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use tessera_auth::{ApplicationSecret, AuthResult, SecretStorage};

/// In-memory secret store keyed by application identity.
///
/// `put` replaces any existing secret for the identity, which is the
/// rotation operation: tokens signed under the previous secret stop
/// verifying immediately.
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    secrets: RwLock<HashMap<String, ApplicationSecret>>,
}

impl MemorySecretStore {
    /// Creates an empty secret store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SecretStorage for MemorySecretStore {
    async fn put(&self, application_id: &str, secret: ApplicationSecret) -> AuthResult<()> {
        let mut secrets = self.secrets.write().await;
        secrets.insert(application_id.to_string(), secret);
        Ok(())
    }

    async fn get(&self, application_id: &str) -> AuthResult<Option<ApplicationSecret>> {
        let secrets = self.secrets.read().await;
        Ok(secrets.get(application_id).cloned())
    }
}
