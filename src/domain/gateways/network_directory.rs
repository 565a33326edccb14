//! Network Directory Gateway
//!
//! Abstract trait defining the contract for resolving deployment networks.

use crate::domain::models::compiler::CompilerConstraint;
use crate::domain::models::network::{NetworkEntry, NetworkName};

/// Directory trait for resolving deployment network entries.
///
/// Implementations are immutable lookup tables built once before any
/// consumer can observe them; resolution performs no I/O and no
/// validation of the key. An unknown name is simply not defined.
pub trait NetworkDirectory: Send + Sync {
    /// Resolve the entry registered under `name`, if any
    fn resolve(&self, name: &NetworkName) -> Option<NetworkEntry>;

    /// All registered entries, sorted by name ascending
    fn entries(&self) -> Vec<NetworkEntry>;

    /// The registry-wide compiler version constraint
    fn compiler_constraint(&self) -> CompilerConstraint;
}
