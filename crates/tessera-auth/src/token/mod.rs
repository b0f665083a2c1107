//! Token issuance, verification, and the wire format.

pub mod issuer;
pub mod service;
pub mod verifier;
pub mod wire;

pub use issuer::TokenIssuer;
pub use service::TokenService;
pub use verifier::{TokenVerifier, Verification};
