//! Token service configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the token service.
///
/// # Example (TOML)
///
/// ```toml
/// [auth]
/// default_ttl = "60s"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Default token lifetime, applied when issuance is called without an
    /// explicit ttl.
    #[serde(with = "humantime_serde")]
    pub default_ttl: Duration,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            default_ttl: Duration::from_millis(crate::claims::DEFAULT_TTL_MS as u64),
        }
    }
}

impl TokenConfig {
    /// Sets the default token lifetime.
    #[must_use]
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }
}
