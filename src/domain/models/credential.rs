//! Signing Credential Model
//!
//! Represents the signing credential attached to a network entry. Key
//! material is zeroed from memory on drop and never logged or serialized.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Private key material used to sign outgoing transactions.
///
/// The raw value is only reachable through [`SigningKey::reveal`]; the
/// `Debug` representation is redacted.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey(String);

impl SigningKey {
    /// Wrap raw key material
    #[must_use]
    pub fn new(material: impl Into<String>) -> Self {
        Self(material.into())
    }

    /// Expose the raw key material to a transport adapter
    #[must_use]
    pub fn reveal(&self) -> &str {
        &self.0
    }

    /// Whether the wrapped material is the empty string
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey(****)")
    }
}

/// Where a credential value was obtained from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialOrigin {
    /// Read from a process environment variable at snapshot time
    Environment { var: String },
    /// Literal fallback embedded for local-only networks
    Embedded,
}

/// A signing credential resolved at registry construction time.
///
/// A credential may be unresolved when the backing environment variable
/// was absent. Resolution state is carried through silently and only
/// surfaces when a signing provider is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    origin: CredentialOrigin,
    key: Option<SigningKey>,
}

impl Credential {
    /// Create a credential resolved from an environment variable
    #[must_use]
    pub fn from_environment(var: impl Into<String>, key: Option<SigningKey>) -> Self {
        Self {
            origin: CredentialOrigin::Environment { var: var.into() },
            key,
        }
    }

    /// Create a credential from an embedded literal
    #[must_use]
    pub fn embedded(key: SigningKey) -> Self {
        Self {
            origin: CredentialOrigin::Embedded,
            key: Some(key),
        }
    }

    #[must_use]
    pub fn origin(&self) -> &CredentialOrigin {
        &self.origin
    }

    #[must_use]
    pub fn key(&self) -> Option<&SigningKey> {
        self.key.as_ref()
    }

    /// Whether usable (non-empty) key material is present
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.key.as_ref().is_some_and(|key| !key.is_empty())
    }
}
