//! Manifest DTOs
//!
//! Serializable descriptors of the registry surface for external
//! tooling. Credentials are described by provenance only; key material
//! never appears in a manifest.

use serde::Serialize;

use crate::domain::gateways::NetworkDirectory;
use crate::domain::models::credential::CredentialOrigin;
use crate::domain::models::network::NetworkEntry;

/// Where a network's signing credential comes from
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialSourceDto {
    /// Read from a process environment variable
    Environment { var: String },
    /// Embedded in the registry itself
    Embedded,
}

/// One network entry in the manifest
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkEntryDto {
    pub name: String,
    pub endpoint: String,
    pub chain_id: u64,
    pub credential: CredentialSourceDto,
}

impl From<&NetworkEntry> for NetworkEntryDto {
    fn from(entry: &NetworkEntry) -> Self {
        let credential = match entry.credential().origin() {
            CredentialOrigin::Environment { var } => CredentialSourceDto::Environment {
                var: var.clone(),
            },
            CredentialOrigin::Embedded => CredentialSourceDto::Embedded,
        };

        Self {
            name: entry.name().to_string(),
            endpoint: entry.endpoint().to_string(),
            chain_id: entry.chain_id().value(),
            credential,
        }
    }
}

/// Full registry manifest
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDto {
    pub compiler_constraint: String,
    pub networks: Vec<NetworkEntryDto>,
}

impl ManifestDto {
    /// Build a manifest from a directory
    #[must_use]
    pub fn from_directory(directory: &dyn NetworkDirectory) -> Self {
        let networks = directory
            .entries()
            .iter()
            .map(NetworkEntryDto::from)
            .collect();

        Self {
            compiler_constraint: directory.compiler_constraint().to_string(),
            networks,
        }
    }

    /// Render the manifest as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
