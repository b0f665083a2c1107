//! Application secret generation.
//!
//! Secrets are 256-bit random values (32 bytes) generated from the operating
//! system's cryptographically secure RNG and handled as hexadecimal strings.
//! A secret is only ever used to derive token signatures; it is never
//! embedded in a token.

use std::fmt;

use rand::RngCore;
use rand::rngs::OsRng;

/// Number of random bytes in a generated secret.
const SECRET_LEN: usize = 32;

/// A per-application symmetric signing secret.
///
/// Wraps the hex-encoded secret so it can be passed around without exposing
/// the raw string in `Debug` output. Use [`ApplicationSecret::as_str`] at the
/// boundary where the secret is handed back to the registering caller.
#[derive(Clone, PartialEq, Eq)]
pub struct ApplicationSecret(String);

impl ApplicationSecret {
    /// Wraps an existing hex-encoded secret.
    ///
    /// Intended for storage backends that load secrets from an external
    /// source; new secrets should come from [`generate_secret`].
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Returns the hex-encoded secret string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the secret as key material for signature derivation.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ApplicationSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Secrets must not leak through logs or panic messages.
        f.write_str("ApplicationSecret(<redacted>)")
    }
}

/// Generates a new cryptographically secure application secret.
///
/// The secret is a 256-bit (32 byte) random value encoded as 64 hexadecimal
/// characters.
///
/// # Panics
///
/// Panics if the operating system's random source fails. This is the one
/// unrecoverable condition in the service: without secure randomness the
/// confidentiality guarantee cannot be honored at all.
#[must_use]
pub fn generate_secret() -> ApplicationSecret {
    let mut bytes = [0u8; SECRET_LEN];
    OsRng.fill_bytes(&mut bytes);
    ApplicationSecret(hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_secret_format() {
        let secret = generate_secret();
        assert_eq!(secret.as_str().len(), 64, "Secret should be 64 hex chars");
        assert!(
            hex::decode(secret.as_str()).is_ok(),
            "Secret should be valid hex"
        );
    }

    #[test]
    fn test_generate_secret_uniqueness() {
        let secret1 = generate_secret();
        let secret2 = generate_secret();
        assert_ne!(secret1, secret2, "Secrets should be unique");
    }

    #[test]
    fn test_debug_is_redacted() {
        let secret = generate_secret();
        let debug = format!("{secret:?}");
        assert!(!debug.contains(secret.as_str()));
        assert!(debug.contains("redacted"));
    }
}
