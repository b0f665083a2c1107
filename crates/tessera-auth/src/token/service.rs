//! Token service facade.
//!
//! This module ties the issuer, verifier, and storage together behind the
//! operations the surrounding application calls:
//!
//! - Application registration (secret provisioning)
//! - Token issuance
//! - Token verification
//! - Token revocation
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use tessera_auth::{TokenConfig, TokenService};
//!
//! let service = TokenService::new(secret_storage, revocation_storage);
//! let secret = service.register_application("app1").await?;
//! let token = service.issue("app1", &payload, None).await?;
//! let verification = service.verify(&token).await;
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::AuthResult;
use crate::config::TokenConfig;
use crate::error::AuthError;
use crate::secret::{ApplicationSecret, generate_secret};
use crate::storage::{RevocationStorage, SecretStorage};
use crate::token::issuer::TokenIssuer;
use crate::token::verifier::{TokenVerifier, Verification};

/// Facade over secret provisioning, issuance, verification, and revocation.
pub struct TokenService {
    secrets: Arc<dyn SecretStorage>,
    revocations: Arc<dyn RevocationStorage>,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
}

impl TokenService {
    /// Creates a token service with the default configuration.
    #[must_use]
    pub fn new(
        secrets: Arc<dyn SecretStorage>,
        revocations: Arc<dyn RevocationStorage>,
    ) -> Self {
        Self::with_config(secrets, revocations, TokenConfig::default())
    }

    /// Creates a token service with an explicit configuration.
    #[must_use]
    pub fn with_config(
        secrets: Arc<dyn SecretStorage>,
        revocations: Arc<dyn RevocationStorage>,
        config: TokenConfig,
    ) -> Self {
        let issuer = TokenIssuer::new(Arc::clone(&secrets), Arc::clone(&revocations), config);
        let verifier = TokenVerifier::new(Arc::clone(&secrets), Arc::clone(&revocations));
        Self {
            secrets,
            revocations,
            issuer,
            verifier,
        }
    }

    /// Registers an application and returns its freshly generated secret.
    ///
    /// Calling this again for the same `application_id` rotates the secret:
    /// the previous one is overwritten, and every token issued under it
    /// stops verifying immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret cannot be stored.
    pub async fn register_application(
        &self,
        application_id: &str,
    ) -> AuthResult<ApplicationSecret> {
        let secret = generate_secret();
        self.secrets.put(application_id, secret.clone()).await?;
        tracing::info!(application_id = %application_id, "Registered application");
        Ok(secret)
    }

    /// Issues a token for `application_id` carrying `payload`, expiring
    /// `ttl` from now (`None` selects the configured default).
    ///
    /// The payload is opaque to the service; it is embedded as-is and
    /// surfaced back on successful verification.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UnknownApplication`] if the application was
    /// never registered, or an internal error if the payload cannot be
    /// serialized.
    pub async fn issue<T: Serialize>(
        &self,
        application_id: &str,
        payload: &T,
        ttl: Option<Duration>,
    ) -> AuthResult<String> {
        let payload = serde_json::to_value(payload)
            .map_err(|e| AuthError::internal(format!("Could not serialize payload: {e}")))?;
        self.issuer.issue(application_id, payload, ttl).await
    }

    /// Verifies a token, returning its payload when valid.
    ///
    /// Never fails for malformed input; every rejection is reported as
    /// `valid = false` with no distinguishing detail.
    pub async fn verify(&self, token: &str) -> Verification {
        self.verifier.verify(token).await
    }

    /// Revokes a token ahead of its natural expiry.
    ///
    /// Idempotent: revoking an already-revoked or never-issued token is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns an error only if the registry operation fails.
    pub async fn revoke(&self, token: &str) -> AuthResult<()> {
        self.revocations.revoke(token).await?;
        tracing::debug!("Revoked token");
        Ok(())
    }

    /// Prunes revocation registry entries for naturally lapsed tokens.
    ///
    /// Returns the number of entries removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the cleanup operation fails.
    pub async fn cleanup_expired(&self) -> AuthResult<u64> {
        let removed = self.revocations.cleanup_expired().await?;
        if removed > 0 {
            tracing::debug!(removed, "Pruned lapsed registry entries");
        }
        Ok(removed)
    }
}
