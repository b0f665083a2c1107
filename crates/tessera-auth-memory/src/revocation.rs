//! In-memory revocation registry.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use tessera_auth::claims::now_unix_ms;
use tessera_auth::{AuthResult, RevocationStorage};

/// In-memory revocation registry keyed by the full token string.
///
/// An entry means "issued and not revoked"; its value is the token's natural
/// expiry (Unix milliseconds), kept so [`cleanup_expired`] can prune entries
/// for tokens that would be rejected as expired anyway.
///
/// [`cleanup_expired`]: RevocationStorage::cleanup_expired
#[derive(Debug, Default)]
pub struct MemoryRevocationRegistry {
    issued: RwLock<HashMap<String, i64>>,
}

impl MemoryRevocationRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RevocationStorage for MemoryRevocationRegistry {
    async fn register_issued(&self, token: &str, expires_at: i64) -> AuthResult<()> {
        let mut issued = self.issued.write().await;
        issued.insert(token.to_string(), expires_at);
        Ok(())
    }

    async fn revoke(&self, token: &str) -> AuthResult<()> {
        let mut issued = self.issued.write().await;
        issued.remove(token);
        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> AuthResult<bool> {
        let issued = self.issued.read().await;
        Ok(!issued.contains_key(token))
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now = now_unix_ms();
        let mut issued = self.issued.write().await;
        let before = issued.len();
        issued.retain(|_, expires_at| *expires_at >= now);
        Ok((before - issued.len()) as u64)
    }
}
