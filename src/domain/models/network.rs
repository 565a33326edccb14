//! Network Domain Model
//!
//! Represents a deployment target network in the registry.

use validator::Validate;

use crate::domain::models::credential::Credential;
use crate::shared::errors::DomainError;

/// Newtype wrapper for the symbolic network name providing type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkName(String);

impl NetworkName {
    /// Create a NetworkName from a string
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NetworkName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NetworkName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for NetworkName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Newtype wrapper for a chain identifier (EIP-155 replay protection)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(u64);

impl ChainId {
    /// Create a ChainId from its numeric value
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying numeric value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Validates an endpoint URL (must start with http:// or https://)
fn validate_endpoint(endpoint: &str) -> Result<(), validator::ValidationError> {
    // Check protocol
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        let mut error = validator::ValidationError::new("endpoint");
        error.message = Some("endpoint must start with http:// or https://".into());
        return Err(error);
    }

    // Check the URL has a host (not just protocol)
    let without_protocol = endpoint
        .strip_prefix("https://")
        .or_else(|| endpoint.strip_prefix("http://"))
        .unwrap_or("");
    if without_protocol.is_empty() || without_protocol.starts_with('/') {
        let mut error = validator::ValidationError::new("endpoint");
        error.message = Some("endpoint must include a valid host".into());
        return Err(error);
    }

    Ok(())
}

/// Data required to construct a network entry
#[derive(Debug, Clone, Validate)]
pub struct EntryData {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(max = 500, message = "endpoint must be at most 500 characters"))]
    #[validate(custom(function = "validate_endpoint"))]
    pub endpoint: String,

    #[validate(range(min = 1, message = "chain_id must be at least 1"))]
    pub chain_id: u64,

    pub credential: Credential,
}

/// Network entry: the parameters needed to reach and sign for one
/// deployment target.
///
/// Entries are immutable once constructed; the registry holding them is
/// built once at process start and never changes afterwards.
#[derive(Debug, Clone)]
pub struct NetworkEntry {
    name: NetworkName,
    endpoint: String,
    chain_id: ChainId,
    credential: Credential,
}

impl NetworkEntry {
    /// Create a new entry from construction data
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEntry` when the data violates entry
    /// invariants (empty name, malformed endpoint, zero chain id).
    pub fn new(data: EntryData) -> Result<Self, DomainError> {
        data.validate()?;
        Ok(Self {
            name: NetworkName::new(data.name),
            endpoint: data.endpoint,
            chain_id: ChainId::new(data.chain_id),
            credential: data.credential,
        })
    }

    // Getters

    #[must_use]
    pub fn name(&self) -> &NetworkName {
        &self.name
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    #[must_use]
    pub fn credential(&self) -> &Credential {
        &self.credential
    }
}
