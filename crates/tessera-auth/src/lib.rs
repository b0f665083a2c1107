//! # tessera-auth
//!
//! Signed-token authentication for per-application callers.
//!
//! This crate provides:
//! - Per-application secret provisioning backed by a secure random source
//! - HMAC-SHA256 token issuance with embedded expiry
//! - Fail-closed token verification
//! - Explicit revocation ahead of natural expiry
//!
//! ## Overview
//!
//! Each application identity owns one symmetric secret. A token is the
//! base64url-encoded claim set joined to a hex HMAC signature with a `.`
//! delimiter; it verifies only while the signature matches, the expiry has
//! not passed, and the token has not been revoked.
//!
//! Storage is pluggable through the [`storage`] traits; the in-memory
//! reference backend lives in the `tessera-auth-memory` crate.
//!
//! ## Modules
//!
//! - [`claims`] - The signed claim set and its validity window
//! - [`config`] - Token service configuration
//! - [`error`] - Error taxonomy
//! - [`secret`] - Application secret generation
//! - [`storage`] - Storage traits for secrets and the revocation registry
//! - [`token`] - Issuer, verifier, wire format, and the service facade

pub mod claims;
pub mod config;
pub mod error;
pub mod secret;
pub mod storage;
pub mod token;

pub use claims::{ClaimSet, DEFAULT_TTL_MS};
pub use config::TokenConfig;
pub use error::{AuthError, ErrorCategory};
pub use secret::{ApplicationSecret, generate_secret};
pub use storage::{RevocationStorage, SecretStorage};
pub use token::{TokenIssuer, TokenService, TokenVerifier, Verification};

/// Type alias for authentication results.
pub type AuthResult<T> = Result<T, AuthError>;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use tessera_auth::prelude::*;
/// ```
pub mod prelude {
    pub use crate::AuthResult;
    pub use crate::claims::{ClaimSet, DEFAULT_TTL_MS};
    pub use crate::config::TokenConfig;
    pub use crate::error::{AuthError, ErrorCategory};
    pub use crate::secret::{ApplicationSecret, generate_secret};
    pub use crate::storage::{RevocationStorage, SecretStorage};
    pub use crate::token::{TokenIssuer, TokenService, TokenVerifier, Verification};
}
