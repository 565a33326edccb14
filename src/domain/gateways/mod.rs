//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for resolving networks and
//! constructing signing providers. These are implemented by driven
//! adapters in the infrastructure layer.

pub mod network_directory;
pub mod signing_provider;

pub use network_directory::NetworkDirectory;
pub use signing_provider::{SigningProvider, SigningProviderFactory};

#[cfg(test)]
pub use signing_provider::MockSigningProviderFactory;
