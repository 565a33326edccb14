//! Common test utilities for e2e tests
//!
//! Provides tracing setup and registry fixtures shared across tests.

use std::sync::Once;

use deployment_network_registry::infrastructure::driven_adapters::env_snapshot::EnvSnapshot;
use deployment_network_registry::infrastructure::driven_adapters::static_directory::StaticNetworkDirectory;

/// Well-known throwaway signing key (first Anvil/Hardhat dev account)
pub const TEST_SIGNING_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

static TRACING: Once = Once::new();

/// Initialize tracing output for tests (respects RUST_LOG)
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Standard directory built from a snapshot carrying `TEST_SIGNING_KEY`
pub fn standard_directory() -> StaticNetworkDirectory {
    StaticNetworkDirectory::standard(&EnvSnapshot::with_priv_key(TEST_SIGNING_KEY))
        .expect("standard directory")
}

/// Standard directory built from a snapshot with no `PRIV_KEY`
pub fn standard_directory_without_key() -> StaticNetworkDirectory {
    StaticNetworkDirectory::standard(&EnvSnapshot::empty()).expect("standard directory")
}
