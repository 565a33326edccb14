//! Get Compiler Constraint Use Case
//!
//! Exposes the registry-wide compiler version constraint.

use std::sync::Arc;

use crate::domain::gateways::NetworkDirectory;
use crate::domain::models::compiler::CompilerConstraint;

/// Use case for reading the global compiler constraint
pub struct GetCompilerConstraintUseCase {
    network_directory: Arc<dyn NetworkDirectory>,
}

impl GetCompilerConstraintUseCase {
    /// Create a new GetCompilerConstraintUseCase
    #[must_use]
    pub fn new(network_directory: Arc<dyn NetworkDirectory>) -> Self {
        Self { network_directory }
    }

    /// Execute the use case
    #[must_use]
    pub fn execute(&self) -> CompilerConstraint {
        let constraint = self.network_directory.compiler_constraint();
        tracing::debug!(constraint = %constraint, "Read compiler constraint");
        constraint
    }
}
