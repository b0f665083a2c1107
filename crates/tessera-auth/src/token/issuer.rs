//! Token issuance.

use std::sync::Arc;
use std::time::Duration;

use crate::AuthResult;
use crate::claims::ClaimSet;
use crate::config::TokenConfig;
use crate::error::AuthError;
use crate::storage::{RevocationStorage, SecretStorage};
use crate::token::wire;

/// Issues signed tokens bound to one application and one caller-supplied
/// payload, valid for a bounded time window.
///
/// Every issued token is recorded in the revocation registry so it can be
/// invalidated before its natural expiry.
pub struct TokenIssuer {
    secrets: Arc<dyn SecretStorage>,
    revocations: Arc<dyn RevocationStorage>,
    config: TokenConfig,
}

impl TokenIssuer {
    /// Creates a new issuer over the given stores.
    #[must_use]
    pub fn new(
        secrets: Arc<dyn SecretStorage>,
        revocations: Arc<dyn RevocationStorage>,
        config: TokenConfig,
    ) -> Self {
        Self {
            secrets,
            revocations,
            config,
        }
    }

    /// Issues a token for `application_id` carrying `payload`.
    ///
    /// The token expires `ttl` from now; `None` selects the configured
    /// default lifetime, and a zero duration falls back to
    /// [`DEFAULT_TTL_MS`](crate::claims::DEFAULT_TTL_MS).
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UnknownApplication`] if no secret is registered
    /// for `application_id`, or a storage/internal error if encoding or
    /// registry bookkeeping fails.
    pub async fn issue(
        &self,
        application_id: &str,
        payload: serde_json::Value,
        ttl: Option<Duration>,
    ) -> AuthResult<String> {
        let Some(secret) = self.secrets.get(application_id).await? else {
            tracing::debug!(application_id = %application_id, "Issuance refused: unknown application");
            return Err(AuthError::unknown_application(application_id));
        };

        let ttl = ttl.unwrap_or(self.config.default_ttl);
        let claims = ClaimSet::new(application_id, payload, Some(ttl));
        let token = wire::encode(&claims, &secret)?;

        self.revocations
            .register_issued(&token, claims.expires_at)
            .await?;

        tracing::debug!(
            application_id = %application_id,
            expires_at = claims.expires_at,
            "Issued token"
        );
        Ok(token)
    }
}
