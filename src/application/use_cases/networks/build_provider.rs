//! Build Provider Use Case
//!
//! Resolves a network entry by name and constructs a signing provider
//! for it. Credential problems are deferred to this point: an entry with
//! an absent or malformed key resolves fine but fails here.

use std::sync::Arc;

use crate::domain::gateways::{NetworkDirectory, SigningProvider, SigningProviderFactory};
use crate::domain::models::network::NetworkName;
use crate::shared::errors::UseCaseError;

/// Use case for building a signing provider for a named network
pub struct BuildProviderUseCase {
    network_directory: Arc<dyn NetworkDirectory>,
    provider_factory: Arc<dyn SigningProviderFactory>,
}

impl BuildProviderUseCase {
    /// Create a new BuildProviderUseCase
    #[must_use]
    pub fn new(
        network_directory: Arc<dyn NetworkDirectory>,
        provider_factory: Arc<dyn SigningProviderFactory>,
    ) -> Self {
        Self {
            network_directory,
            provider_factory,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no entry is registered under the
    /// given name.
    /// Returns `UseCaseError::Provider` if the entry's credential is absent
    /// or malformed.
    pub fn execute(&self, name: &NetworkName) -> Result<Box<dyn SigningProvider>, UseCaseError> {
        tracing::debug!(network = %name, "Building signing provider");

        let entry = self.network_directory.resolve(name).ok_or_else(|| {
            tracing::warn!(network = %name, "Network not found");
            UseCaseError::NotFound {
                resource: "Network".to_string(),
                name: name.to_string(),
            }
        })?;

        let provider = self.provider_factory.create(&entry)?;

        tracing::debug!(
            network = %name,
            endpoint = provider.endpoint(),
            chain_id = %provider.chain_id(),
            "Signing provider ready"
        );
        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::MockSigningProviderFactory;
    use crate::domain::models::compiler::CompilerConstraint;
    use crate::domain::models::credential::{Credential, SigningKey};
    use crate::domain::models::network::{ChainId, EntryData, NetworkEntry};
    use crate::shared::errors::ProviderError;

    struct StubNetworkDirectory {
        entries: Vec<NetworkEntry>,
    }

    impl StubNetworkDirectory {
        fn new(entries: Vec<NetworkEntry>) -> Self {
            Self { entries }
        }
    }

    impl NetworkDirectory for StubNetworkDirectory {
        fn resolve(&self, name: &NetworkName) -> Option<NetworkEntry> {
            self.entries.iter().find(|entry| entry.name() == name).cloned()
        }

        fn entries(&self) -> Vec<NetworkEntry> {
            self.entries.clone()
        }

        fn compiler_constraint(&self) -> CompilerConstraint {
            CompilerConstraint::new("^0.5").expect("valid constraint")
        }
    }

    #[derive(Debug)]
    struct StaticProvider {
        endpoint: String,
        chain_id: ChainId,
    }

    impl SigningProvider for StaticProvider {
        fn endpoint(&self) -> &str {
            &self.endpoint
        }

        fn chain_id(&self) -> ChainId {
            self.chain_id
        }
    }

    fn create_test_entry(name: &str) -> NetworkEntry {
        NetworkEntry::new(EntryData {
            name: name.to_string(),
            endpoint: "https://rpc.testnet.moonbeam.network".to_string(),
            chain_id: 43,
            credential: Credential::from_environment("PRIV_KEY", Some(SigningKey::new("aa"))),
        })
        .expect("valid test data")
    }

    #[test]
    fn should_build_provider_for_registered_network() {
        let directory = Arc::new(StubNetworkDirectory::new(vec![create_test_entry("moon")]));
        let mut factory = MockSigningProviderFactory::new();
        factory.expect_create().times(1).returning(|entry| {
            Ok(Box::new(StaticProvider {
                endpoint: entry.endpoint().to_string(),
                chain_id: entry.chain_id(),
            }) as Box<dyn SigningProvider>)
        });

        let use_case = BuildProviderUseCase::new(directory, Arc::new(factory));
        let result = use_case.execute(&NetworkName::from("moon"));

        assert!(result.is_ok());
        let provider = result.unwrap();
        assert_eq!(provider.endpoint(), "https://rpc.testnet.moonbeam.network");
        assert_eq!(provider.chain_id().value(), 43);
    }

    #[test]
    fn should_not_touch_factory_when_network_is_unknown() {
        let directory = Arc::new(StubNetworkDirectory::new(vec![create_test_entry("moon")]));
        let mut factory = MockSigningProviderFactory::new();
        factory.expect_create().times(0);

        let use_case = BuildProviderUseCase::new(directory, Arc::new(factory));
        let result = use_case.execute(&NetworkName::from("mainnet"));

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }

    #[test]
    fn should_surface_credential_errors_from_factory() {
        let directory = Arc::new(StubNetworkDirectory::new(vec![create_test_entry("moon")]));
        let mut factory = MockSigningProviderFactory::new();
        factory
            .expect_create()
            .times(1)
            .returning(|_| Err(ProviderError::MissingCredential("PRIV_KEY".to_string())));

        let use_case = BuildProviderUseCase::new(directory, Arc::new(factory));
        let result = use_case.execute(&NetworkName::from("moon"));

        assert!(matches!(
            result.unwrap_err(),
            UseCaseError::Provider(ProviderError::MissingCredential(_))
        ));
    }
}
