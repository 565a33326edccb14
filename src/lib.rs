//! Deployment Network Registry
//!
//! A Rust library modeling the deployment configuration of a
//! smart-contract toolchain, following Clean/Hexagonal Architecture
//! principles: a static table of deployment networks, deferred
//! signing-provider construction, and a global compiler constraint.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
