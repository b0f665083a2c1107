//! Token verification.
//!
//! Verification fails closed: malformed input, an unknown application, a
//! signature mismatch, expiry, revocation, and storage faults all produce the
//! same `valid = false` result. Failure modes are indistinguishable to the
//! caller so a probing attacker gains no oracle about which check rejected
//! the token; the reason is only recorded in logs.

use std::sync::Arc;

use serde::Serialize;

use crate::claims::now_unix_ms;
use crate::error::AuthError;
use crate::storage::{RevocationStorage, SecretStorage};
use crate::token::wire;

/// The outcome of verifying a token.
///
/// `payload` is only present when the token is valid.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct Verification {
    /// Whether the token is currently valid.
    pub valid: bool,

    /// The payload embedded at issuance, surfaced on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl Verification {
    /// A failed verification. Carries no detail, by contract.
    #[must_use]
    pub fn denied() -> Self {
        Self::default()
    }

    /// A successful verification surfacing the embedded payload.
    #[must_use]
    pub fn granted(payload: serde_json::Value) -> Self {
        Self {
            valid: true,
            payload: Some(payload),
        }
    }
}

/// Decides whether a token is currently valid and surfaces its payload.
pub struct TokenVerifier {
    secrets: Arc<dyn SecretStorage>,
    revocations: Arc<dyn RevocationStorage>,
}

impl TokenVerifier {
    /// Creates a new verifier over the given stores.
    #[must_use]
    pub fn new(secrets: Arc<dyn SecretStorage>, revocations: Arc<dyn RevocationStorage>) -> Self {
        Self {
            secrets,
            revocations,
        }
    }

    /// Verifies a token.
    ///
    /// Never fails for malformed input; every rejection is reported as
    /// [`Verification::denied`].
    pub async fn verify(&self, token: &str) -> Verification {
        match self.check(token).await {
            Ok(payload) => Verification::granted(payload),
            Err(_) => Verification::denied(),
        }
    }

    /// Runs the verification steps in order, logging the first failure.
    async fn check(&self, token: &str) -> Result<serde_json::Value, AuthError> {
        // 1. Exactly two segments, or fail closed.
        let Some((segment, signature)) = wire::split(token) else {
            tracing::debug!("Token rejected: malformed");
            return Err(AuthError::invalid_token("malformed token"));
        };

        // 2. Decode the claims, or fail closed.
        let claims = wire::decode_claims(segment).inspect_err(|e| {
            tracing::debug!(error = %e, "Token rejected: undecodable claims");
        })?;

        // 3. Look up the claimed application's secret.
        let secret = self
            .secrets
            .get(&claims.application_id)
            .await
            .inspect_err(|e| {
                tracing::warn!(error = %e, "Token rejected: secret lookup failed");
            })?
            .ok_or_else(|| {
                tracing::debug!(
                    application_id = %claims.application_id,
                    "Token rejected: unknown application"
                );
                AuthError::unknown_application(claims.application_id.clone())
            })?;

        // 4. Recompute the HMAC over the raw encoded segment and compare in
        //    constant time.
        if !wire::verify_signature(&secret, segment, signature) {
            tracing::debug!(
                application_id = %claims.application_id,
                "Token rejected: signature mismatch"
            );
            return Err(AuthError::invalid_token("signature mismatch"));
        }

        // 5. Expiry.
        if claims.is_expired(now_unix_ms()) {
            tracing::debug!(
                application_id = %claims.application_id,
                expires_at = claims.expires_at,
                "Token rejected: expired"
            );
            return Err(AuthError::TokenExpired);
        }

        // 6. Revocation. A registry fault also fails closed.
        let revoked = self.revocations.is_revoked(token).await.inspect_err(|e| {
            tracing::warn!(error = %e, "Token rejected: revocation lookup failed");
        })?;
        if revoked {
            tracing::debug!(
                application_id = %claims.application_id,
                "Token rejected: revoked"
            );
            return Err(AuthError::TokenRevoked);
        }

        Ok(claims.payload)
    }
}
