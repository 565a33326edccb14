//! Driving Adapters
//!
//! Surfaces that expose the registry to the consuming toolchain:
//! - Manifest DTOs for serialization

pub mod manifest;
