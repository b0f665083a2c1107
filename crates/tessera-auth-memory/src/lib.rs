//! # tessera-auth-memory
//!
//! In-memory storage backend for `tessera-auth`.
//!
//! This crate implements the `tessera-auth` storage traits over
//! process-local maps guarded by `tokio::sync::RwLock`:
//!
//! - [`MemorySecretStore`] - one signing secret per application identity
//! - [`MemoryRevocationRegistry`] - issued-token bookkeeping and revocation
//!
//! State lives for the lifetime of the process and is not shared across
//! instances. A deployment that needs cross-instance consistency should
//! implement the storage traits over an external store instead.

mod revocation;
mod secret;

pub use revocation::MemoryRevocationRegistry;
pub use secret::MemorySecretStore;
