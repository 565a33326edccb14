//! Get Networks Use Case
//!
//! Lists every registered network entry, sorted by name.

use std::sync::Arc;

use crate::domain::gateways::NetworkDirectory;
use crate::domain::models::network::NetworkEntry;

/// Use case for listing all registered networks
pub struct GetNetworksUseCase {
    network_directory: Arc<dyn NetworkDirectory>,
}

impl GetNetworksUseCase {
    /// Create a new GetNetworksUseCase
    #[must_use]
    pub fn new(network_directory: Arc<dyn NetworkDirectory>) -> Self {
        Self { network_directory }
    }

    /// Execute the use case
    #[must_use]
    pub fn execute(&self) -> Vec<NetworkEntry> {
        tracing::debug!("Listing registered networks");

        let entries = self.network_directory.entries();

        tracing::debug!(count = entries.len(), "Found registered networks");
        entries
    }
}
