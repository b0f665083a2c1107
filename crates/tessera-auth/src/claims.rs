//! Token claim set.
//!
//! The claim set is the structured payload embedded in every token: the
//! application identity, the caller-supplied payload, and the validity
//! window. It is constructed fresh on each issuance and immutable once
//! signed; the verifier only ever reads it back.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Fallback token lifetime applied when the caller supplies no ttl.
pub const DEFAULT_TTL_MS: i64 = 60_000;

/// Returns the current Unix time in milliseconds.
#[must_use]
pub fn now_unix_ms() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// The signed contents of a token.
///
/// Field order matters: serialization follows the declaration order below,
/// which keeps the encoded form deterministic for a given claim set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimSet {
    /// The application this token is bound to.
    pub application_id: String,

    /// Caller-supplied payload. Opaque to the service.
    pub payload: serde_json::Value,

    /// Issuance time (Unix milliseconds).
    pub issued_at: i64,

    /// Expiry time (Unix milliseconds). Always greater than `issued_at`.
    pub expires_at: i64,
}

impl ClaimSet {
    /// Builds a new claim set expiring `ttl` from now.
    ///
    /// A `None` or zero ttl falls back to [`DEFAULT_TTL_MS`], so the
    /// resulting window is always non-empty.
    #[must_use]
    pub fn new(
        application_id: impl Into<String>,
        payload: serde_json::Value,
        ttl: Option<std::time::Duration>,
    ) -> Self {
        let ttl_ms = match ttl {
            Some(ttl) if !ttl.is_zero() => ttl.as_millis() as i64,
            _ => DEFAULT_TTL_MS,
        };
        let issued_at = now_unix_ms();
        Self {
            application_id: application_id.into(),
            payload,
            issued_at,
            expires_at: issued_at + ttl_ms,
        }
    }

    /// Returns `true` if the claim set has expired at `now` (Unix ms).
    #[must_use]
    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expires_at
    }

    /// Remaining lifetime in milliseconds at `now`, floored at zero.
    #[must_use]
    pub fn remaining_ttl(&self, now: i64) -> i64 {
        (self.expires_at - now).max(0)
    }
}
