//! Application Layer
//!
//! Contains the use cases that orchestrate registry reads.
//! Use cases depend only on domain gateways, never on concrete adapters.

pub mod use_cases;
