//! Environment Snapshot
//!
//! One-shot capture of process environment state. The registry reads
//! credential values from an injected snapshot rather than from live
//! process state, so every entry observes the same environment no matter
//! when it is inspected.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use config::{Config, Environment};

use crate::domain::models::credential::SigningKey;
use crate::shared::errors::SnapshotError;

/// Environment variable holding the deployment signing key
pub const PRIV_KEY_VAR: &str = "PRIV_KEY";

/// Read-only copy of the process environment, taken at one instant.
///
/// Later mutations of the process environment are not visible through an
/// existing snapshot. Values may hold secrets, so the `Debug`
/// representation shows only the variable count.
#[derive(Clone)]
pub struct EnvSnapshot {
    values: HashMap<String, String>,
    captured_at: DateTime<Utc>,
}

impl EnvSnapshot {
    /// Capture the current process environment
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Capture` if the environment source cannot
    /// be collected.
    pub fn capture() -> Result<Self, SnapshotError> {
        let values = Config::builder()
            .add_source(Environment::default())
            .build()?
            .try_deserialize()?;

        Ok(Self {
            values,
            captured_at: Utc::now(),
        })
    }

    /// Create a snapshot with no variables set
    #[must_use]
    pub fn empty() -> Self {
        Self {
            values: HashMap::new(),
            captured_at: Utc::now(),
        }
    }

    /// Create a snapshot containing only `PRIV_KEY`
    #[must_use]
    pub fn with_priv_key(key: &str) -> Self {
        Self::empty().with_var(PRIV_KEY_VAR, key)
    }

    /// Add a variable, replacing any existing value
    #[must_use]
    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_lowercase(), value.to_string());
        self
    }

    /// Look up a variable captured in this snapshot.
    ///
    /// Lookup is case-insensitive; the environment source normalizes
    /// variable names to lowercase.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<&str> {
        self.values.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Read a variable as signing key material.
    ///
    /// Returns `None` when the variable was absent at capture time. An
    /// empty value yields an empty key, which provider construction
    /// later rejects.
    #[must_use]
    pub fn signing_key(&self, name: &str) -> Option<SigningKey> {
        self.var(name).map(SigningKey::new)
    }

    /// When this snapshot was captured
    #[must_use]
    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}

impl std::fmt::Debug for EnvSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvSnapshot")
            .field("vars", &self.values.len())
            .field("captured_at", &self.captured_at)
            .finish()
    }
}
