//! Registry Manifest
//!
//! Driving adapter exposing the registry as serializable DTOs for
//! external tooling.

pub mod dto;

pub use dto::{CredentialSourceDto, ManifestDto, NetworkEntryDto};
