//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::network_directory::NetworkDirectory;
pub use gateways::signing_provider::{SigningProvider, SigningProviderFactory};
pub use models::compiler::CompilerConstraint;
pub use models::credential::{Credential, CredentialOrigin, SigningKey};
pub use models::network::{ChainId, EntryData, NetworkEntry, NetworkName};
