//! Driven Adapters
//!
//! Implementations of gateway traits over external state:
//! - Environment snapshot capture
//! - The built-in static network directory
//! - Private key signing provider construction

pub mod env_snapshot;
pub mod provider_factory;
pub mod static_directory;

pub use env_snapshot::{EnvSnapshot, PRIV_KEY_VAR};
pub use provider_factory::{PrivateKeyProviderFactory, PrivateKeySigningProvider};
pub use static_directory::{RegistryBuilder, StaticNetworkDirectory};
