//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod compiler;
pub mod credential;
pub mod network;

pub use compiler::CompilerConstraint;
pub use credential::{Credential, CredentialOrigin, SigningKey};
pub use network::{ChainId, EntryData, NetworkEntry, NetworkName};
