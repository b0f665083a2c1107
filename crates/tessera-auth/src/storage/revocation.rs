//! Revocation registry storage trait.
//!
//! The registry tracks tokens that have been issued and not yet revoked,
//! keyed by the full token string. The issuer registers every token at
//! creation time; `revoke` removes the entry, and the verifier rejects any
//! token that is absent. Entries for naturally lapsed tokens can be pruned
//! at any time, since the expiry check runs before the revocation check.

use async_trait::async_trait;

use crate::AuthResult;

/// Storage trait for the revocation registry.
#[async_trait]
pub trait RevocationStorage: Send + Sync {
    /// Records a freshly issued token.
    ///
    /// `expires_at` is the token's natural expiry (Unix milliseconds), kept
    /// so the entry can be pruned once the token would be rejected as
    /// expired anyway.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn register_issued(&self, token: &str, expires_at: i64) -> AuthResult<()>;

    /// Revokes a token by removing it from the registry.
    ///
    /// # Idempotency
    ///
    /// Revoking an already-revoked or never-issued token is a no-op, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn revoke(&self, token: &str) -> AuthResult<()>;

    /// Checks whether a token has been revoked.
    ///
    /// A token is considered revoked when it is absent from the registry.
    /// This method is called on every verification, so implementations
    /// should keep lookups fast.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn is_revoked(&self, token: &str) -> AuthResult<bool>;

    /// Deletes registry entries whose tokens have naturally expired.
    ///
    /// Returns the number of entries removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the cleanup operation fails.
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
