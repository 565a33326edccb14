//! Signing Provider Gateway
//!
//! Abstract traits for constructing transaction-signing providers from
//! network entries. The RPC transport and the signing implementation
//! belong to the consuming toolchain; this crate only wires the
//! parameters together.

use crate::domain::models::network::{ChainId, NetworkEntry};
use crate::shared::errors::ProviderError;

/// A transaction-signing RPC provider wired to one deployment network.
///
/// Implementations wrap a signing credential and an RPC endpoint;
/// constructing one must not open a connection or touch the network.
/// `Debug` output must keep the wrapped key material redacted.
pub trait SigningProvider: std::fmt::Debug + Send + Sync {
    /// RPC endpoint this provider submits to
    fn endpoint(&self) -> &str;

    /// Chain the provider signs for
    fn chain_id(&self) -> ChainId;
}

/// Factory trait for deferred signing-provider construction.
///
/// Selecting a network entry has no side effect; a provider is only
/// built when the caller commits to using the entry, and building it
/// performs no I/O either.
#[cfg_attr(test, mockall::automock)]
pub trait SigningProviderFactory: Send + Sync {
    /// Build a provider for `entry`
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the entry's credential is missing
    /// or not usable as signing key material.
    fn create(&self, entry: &NetworkEntry) -> Result<Box<dyn SigningProvider>, ProviderError>;
}
