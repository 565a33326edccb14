//! Network Use Cases
//!
//! Business logic for reading the deployment network registry.

mod build_provider;
mod get_compiler_constraint;
mod get_networks;
mod resolve_network;

pub use build_provider::BuildProviderUseCase;
pub use get_compiler_constraint::GetCompilerConstraintUseCase;
pub use get_networks::GetNetworksUseCase;
pub use resolve_network::ResolveNetworkUseCase;
