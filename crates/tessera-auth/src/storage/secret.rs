//! Application secret storage trait.

use async_trait::async_trait;

use crate::AuthResult;
use crate::secret::ApplicationSecret;

/// Storage trait for per-application signing secrets.
///
/// One secret is held per application identity. Writing a secret for an
/// identity that already has one **overwrites** it: this is the rotation
/// operation, and it immediately invalidates every token issued under the
/// previous secret since their signatures no longer verify.
///
/// # Concurrency
///
/// Implementations must make `put` and `get` safe to call concurrently; a
/// reader must never observe a partially written secret.
#[async_trait]
pub trait SecretStorage: Send + Sync {
    /// Stores the secret for an application, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn put(&self, application_id: &str, secret: ApplicationSecret) -> AuthResult<()>;

    /// Looks up the secret for an application.
    ///
    /// A missing entry is not an error: it returns `Ok(None)`, and callers
    /// treat it as "unknown application".
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn get(&self, application_id: &str) -> AuthResult<Option<ApplicationSecret>>;
}
