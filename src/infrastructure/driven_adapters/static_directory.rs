//! Static Network Directory
//!
//! The built-in deployment network table. Entries are declared in code,
//! credentials come from an injected environment snapshot, and the
//! resulting directory never changes for the life of the process.

use std::collections::BTreeMap;

use crate::domain::gateways::NetworkDirectory;
use crate::domain::models::compiler::CompilerConstraint;
use crate::domain::models::credential::{Credential, SigningKey};
use crate::domain::models::network::{EntryData, NetworkEntry, NetworkName};
use crate::infrastructure::driven_adapters::env_snapshot::{EnvSnapshot, PRIV_KEY_VAR};
use crate::shared::errors::DomainError;

/// Names of the built-in networks
pub mod networks {
    /// Local Moonbeam development node
    pub const DEVELOPMENT: &str = "development";
    /// Moonbase Alpha public testnet
    pub const MOON: &str = "moon";
    /// Local Ganache instance
    pub const GANACHE: &str = "ganache";
}

/// Compiler version constraint applied across the whole registry
pub const COMPILER_CONSTRAINT: &str = "^0.5";

const DEVELOPMENT_ENDPOINT: &str = "http://localhost:9933/";
const MOON_ENDPOINT: &str = "https://rpc.testnet.moonbeam.network";
const GANACHE_ENDPOINT: &str = "http://127.0.0.1:8545/";

/// Moonbase Alpha chain id, shared by every built-in target
const MOONBASE_CHAIN_ID: u64 = 43;

/// Throwaway key for local Ganache accounts
const GANACHE_FALLBACK_KEY: &str =
    "896ee2332f8734088cb29d7970db1b3a04d01ee331e5360a609be8b9cee3b27cv";

/// Builder assembling a directory entry by entry
#[derive(Debug)]
pub struct RegistryBuilder {
    entries: BTreeMap<NetworkName, NetworkEntry>,
    constraint: CompilerConstraint,
}

impl RegistryBuilder {
    /// Start an empty directory with the given compiler constraint
    #[must_use]
    pub fn new(constraint: CompilerConstraint) -> Self {
        Self {
            entries: BTreeMap::new(),
            constraint,
        }
    }

    /// Register an entry under its name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateNetwork` if an entry with the same
    /// name is already registered.
    pub fn register(mut self, entry: NetworkEntry) -> Result<Self, DomainError> {
        let name = entry.name().clone();
        if self.entries.contains_key(&name) {
            return Err(DomainError::DuplicateNetwork(name.to_string()));
        }
        self.entries.insert(name, entry);
        Ok(self)
    }

    /// Freeze the directory
    #[must_use]
    pub fn build(self) -> StaticNetworkDirectory {
        StaticNetworkDirectory {
            entries: self.entries,
            constraint: self.constraint,
        }
    }
}

/// Immutable in-memory directory of deployment networks.
///
/// Backed by a `BTreeMap`, so enumeration is always sorted by name.
#[derive(Debug, Clone)]
pub struct StaticNetworkDirectory {
    entries: BTreeMap<NetworkName, NetworkEntry>,
    constraint: CompilerConstraint,
}

impl StaticNetworkDirectory {
    /// Build the standard directory from an environment snapshot.
    ///
    /// `development` and `moon` read their signing key from `PRIV_KEY` in
    /// the snapshot; `ganache` always uses its embedded fallback key. An
    /// absent `PRIV_KEY` still produces a complete directory; the gap
    /// surfaces later, when a provider is built for an affected entry.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if a built-in entry fails validation.
    pub fn standard(snapshot: &EnvSnapshot) -> Result<Self, DomainError> {
        let priv_key = snapshot.signing_key(PRIV_KEY_VAR);
        if priv_key.is_none() {
            tracing::warn!(
                var = PRIV_KEY_VAR,
                "Signing key variable not captured; environment-backed networks cannot build providers"
            );
        }

        let development = NetworkEntry::new(EntryData {
            name: networks::DEVELOPMENT.to_string(),
            endpoint: DEVELOPMENT_ENDPOINT.to_string(),
            chain_id: MOONBASE_CHAIN_ID,
            credential: Credential::from_environment(PRIV_KEY_VAR, priv_key.clone()),
        })?;

        let moon = NetworkEntry::new(EntryData {
            name: networks::MOON.to_string(),
            endpoint: MOON_ENDPOINT.to_string(),
            chain_id: MOONBASE_CHAIN_ID,
            credential: Credential::from_environment(PRIV_KEY_VAR, priv_key),
        })?;

        let ganache = NetworkEntry::new(EntryData {
            name: networks::GANACHE.to_string(),
            endpoint: GANACHE_ENDPOINT.to_string(),
            chain_id: MOONBASE_CHAIN_ID,
            credential: Credential::embedded(SigningKey::new(GANACHE_FALLBACK_KEY)),
        })?;

        let directory = RegistryBuilder::new(CompilerConstraint::new(COMPILER_CONSTRAINT)?)
            .register(development)?
            .register(moon)?
            .register(ganache)?
            .build();

        tracing::info!(
            networks = directory.entries.len(),
            constraint = %directory.constraint,
            "Built standard network directory"
        );
        Ok(directory)
    }
}

impl NetworkDirectory for StaticNetworkDirectory {
    fn resolve(&self, name: &NetworkName) -> Option<NetworkEntry> {
        self.entries.get(name).cloned()
    }

    fn entries(&self) -> Vec<NetworkEntry> {
        self.entries.values().cloned().collect()
    }

    fn compiler_constraint(&self) -> CompilerConstraint {
        self.constraint.clone()
    }
}
