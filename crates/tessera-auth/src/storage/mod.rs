//! Storage traits for auth-related data.
//!
//! The service core is storage-agnostic: the secret store and the revocation
//! registry are consumed through the traits defined here. The reference
//! backend (`tessera-auth-memory`) keeps both in process memory; a
//! deployment sharing state across instances would implement these traits
//! over an external store instead.

mod revocation;
mod secret;

pub use revocation::RevocationStorage;
pub use secret::SecretStorage;
