//! Resolve Network Use Case
//!
//! Looks up a single network entry by its symbolic name.

use std::sync::Arc;

use crate::domain::gateways::NetworkDirectory;
use crate::domain::models::network::{NetworkEntry, NetworkName};
use crate::shared::errors::UseCaseError;

/// Use case for resolving a network entry by name
pub struct ResolveNetworkUseCase {
    network_directory: Arc<dyn NetworkDirectory>,
}

impl ResolveNetworkUseCase {
    /// Create a new ResolveNetworkUseCase
    #[must_use]
    pub fn new(network_directory: Arc<dyn NetworkDirectory>) -> Self {
        Self { network_directory }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no entry is registered under the
    /// given name.
    pub fn execute(&self, name: &NetworkName) -> Result<NetworkEntry, UseCaseError> {
        tracing::debug!(network = %name, "Resolving network entry");

        let entry = self.network_directory.resolve(name).ok_or_else(|| {
            tracing::warn!(network = %name, "Network not found");
            UseCaseError::NotFound {
                resource: "Network".to_string(),
                name: name.to_string(),
            }
        })?;

        tracing::debug!(network = %name, chain_id = %entry.chain_id(), "Network entry resolved");
        Ok(entry)
    }
}
