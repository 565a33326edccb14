//! Private Key Provider Factory
//!
//! Builds signing providers backed by a raw private key. Construction
//! validates the credential but performs no I/O; connections are opened
//! only by the consuming toolchain, if and when it drives the provider.

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::gateways::{SigningProvider, SigningProviderFactory};
use crate::domain::models::credential::{CredentialOrigin, SigningKey};
use crate::domain::models::network::{ChainId, NetworkEntry};
use crate::shared::errors::ProviderError;

lazy_static! {
    /// Regex for raw private key material (32 bytes of hex, optional 0x prefix)
    static ref SIGNING_KEY_REGEX: Regex =
        Regex::new(r"^(0x)?[0-9a-fA-F]{64}$").expect("valid regex");
}

/// Signing provider wired to one network entry
#[derive(Debug)]
pub struct PrivateKeySigningProvider {
    endpoint: String,
    chain_id: ChainId,
    signing_key: SigningKey,
}

impl PrivateKeySigningProvider {
    /// Build a provider from a network entry.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::MissingCredential` if the entry's
    /// credential is absent or empty, and `ProviderError::InvalidCredential`
    /// if the material is not a 64-hex-character key (optional `0x`
    /// prefix). Error messages never include key material.
    pub fn from_entry(entry: &NetworkEntry) -> Result<Self, ProviderError> {
        let credential = entry.credential();

        let key = credential
            .key()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                tracing::warn!(network = %entry.name(), "Missing signing credential");
                let subject = match credential.origin() {
                    CredentialOrigin::Environment { var } => var.clone(),
                    CredentialOrigin::Embedded => entry.name().to_string(),
                };
                ProviderError::MissingCredential(subject)
            })?;

        if !SIGNING_KEY_REGEX.is_match(key.reveal()) {
            tracing::warn!(network = %entry.name(), "Malformed signing credential");
            return Err(ProviderError::InvalidCredential(format!(
                "key material for network \"{}\" is not 32 bytes of hex",
                entry.name()
            )));
        }

        tracing::debug!(
            network = %entry.name(),
            endpoint = entry.endpoint(),
            chain_id = %entry.chain_id(),
            "Constructed signing provider"
        );

        Ok(Self {
            endpoint: entry.endpoint().to_string(),
            chain_id: entry.chain_id(),
            signing_key: key.clone(),
        })
    }

    /// Key material for the consuming transport
    #[must_use]
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}

impl SigningProvider for PrivateKeySigningProvider {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn chain_id(&self) -> ChainId {
        self.chain_id
    }
}

/// Default factory producing [`PrivateKeySigningProvider`] values
#[derive(Debug, Clone, Default)]
pub struct PrivateKeyProviderFactory;

impl PrivateKeyProviderFactory {
    /// Create a new PrivateKeyProviderFactory
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SigningProviderFactory for PrivateKeyProviderFactory {
    fn create(&self, entry: &NetworkEntry) -> Result<Box<dyn SigningProvider>, ProviderError> {
        let provider = PrivateKeySigningProvider::from_entry(entry)?;
        Ok(Box::new(provider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::credential::Credential;
    use crate::domain::models::network::EntryData;

    const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn create_test_entry(credential: Credential) -> NetworkEntry {
        NetworkEntry::new(EntryData {
            name: "moon".to_string(),
            endpoint: "https://rpc.testnet.moonbeam.network".to_string(),
            chain_id: 43,
            credential,
        })
        .expect("valid test data")
    }

    #[test]
    fn builds_provider_for_valid_key() {
        let factory = PrivateKeyProviderFactory::new();
        let entry = create_test_entry(Credential::from_environment(
            "PRIV_KEY",
            Some(SigningKey::new(TEST_KEY)),
        ));

        let provider = factory.create(&entry).expect("provider");

        assert_eq!(provider.endpoint(), "https://rpc.testnet.moonbeam.network");
        assert_eq!(provider.chain_id().value(), 43);
    }

    #[test]
    fn accepts_keys_with_0x_prefix() {
        let factory = PrivateKeyProviderFactory::new();
        let entry = create_test_entry(Credential::embedded(SigningKey::new(format!(
            "0x{TEST_KEY}"
        ))));

        assert!(factory.create(&entry).is_ok());
    }

    #[test]
    fn rejects_absent_credential_naming_the_variable() {
        let factory = PrivateKeyProviderFactory::new();
        let entry = create_test_entry(Credential::from_environment("PRIV_KEY", None));

        let err = factory.create(&entry).unwrap_err();

        assert!(matches!(
            &err,
            ProviderError::MissingCredential(var) if var == "PRIV_KEY"
        ));
    }

    #[test]
    fn rejects_empty_credential() {
        let factory = PrivateKeyProviderFactory::new();
        let entry = create_test_entry(Credential::from_environment(
            "PRIV_KEY",
            Some(SigningKey::new("")),
        ));

        assert!(matches!(
            factory.create(&entry).unwrap_err(),
            ProviderError::MissingCredential(_)
        ));
    }

    #[test]
    fn rejects_non_hex_key_material() {
        let factory = PrivateKeyProviderFactory::new();
        // 64 hex chars followed by a stray character
        let entry = create_test_entry(Credential::embedded(SigningKey::new(
            "896ee2332f8734088cb29d7970db1b3a04d01ee331e5360a609be8b9cee3b27cv",
        )));

        let err = factory.create(&entry).unwrap_err();

        assert!(matches!(err, ProviderError::InvalidCredential(_)));
        assert!(!err.to_string().contains("896ee233"));
    }

    #[test]
    fn rejects_truncated_key_material() {
        let factory = PrivateKeyProviderFactory::new();
        let entry = create_test_entry(Credential::embedded(SigningKey::new("deadbeef")));

        assert!(matches!(
            factory.create(&entry).unwrap_err(),
            ProviderError::InvalidCredential(_)
        ));
    }

    #[test]
    fn boxed_provider_debug_output_redacts_key_material() {
        let factory = PrivateKeyProviderFactory::new();
        let entry = create_test_entry(Credential::embedded(SigningKey::new(TEST_KEY)));

        let provider = factory.create(&entry).expect("provider");
        let rendered = format!("{provider:?}");

        assert!(rendered.contains("SigningKey(****)"));
        assert!(!rendered.contains(TEST_KEY));
    }

    #[test]
    fn provider_exposes_key_material_for_transports() {
        let entry = create_test_entry(Credential::embedded(SigningKey::new(TEST_KEY)));

        let provider = PrivateKeySigningProvider::from_entry(&entry).expect("provider");

        assert_eq!(provider.signing_key().reveal(), TEST_KEY);
        assert_eq!(provider.endpoint(), entry.endpoint());
    }
}
