//! Infrastructure Layer
//!
//! Contains all external concerns: driven adapters (environment capture,
//! the static directory, provider construction) and driving adapters
//! (manifest serialization).

pub mod driven_adapters;
pub mod driving_adapters;
