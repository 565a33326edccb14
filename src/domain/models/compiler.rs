//! Compiler Constraint Model
//!
//! The semantic-version range governing which compiler release is
//! permitted to build source artifacts. Global to the registry, not
//! per-network.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::errors::DomainError;

/// Accepts an optional `^`/`~`/`=` prefix and one to three dotted
/// numeric components, e.g. `^0.5`, `~0.8.19`, `0.5.16`.
static CONSTRAINT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\^~=]?\d+(\.\d+){0,2}$").expect("valid regex"));

/// A validated compiler version range, stored as the literal string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConstraint(String);

impl CompilerConstraint {
    /// Create a constraint from a version range string
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidConstraint` if the string is not a
    /// recognizable version range.
    pub fn new(range: impl Into<String>) -> Result<Self, DomainError> {
        let range = range.into();
        if CONSTRAINT_REGEX.is_match(&range) {
            Ok(Self(range))
        } else {
            Err(DomainError::InvalidConstraint(range))
        }
    }

    /// The literal range string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CompilerConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_caret_minor_range() {
        let constraint = CompilerConstraint::new("^0.5").unwrap();
        assert_eq!(constraint.as_str(), "^0.5");
        assert_eq!(constraint.to_string(), "^0.5");
    }

    #[test]
    fn accepts_common_range_shapes() {
        assert!(CompilerConstraint::new("~0.8.19").is_ok());
        assert!(CompilerConstraint::new("=0.5.16").is_ok());
        assert!(CompilerConstraint::new("0.5").is_ok());
        assert!(CompilerConstraint::new("1").is_ok());
    }

    #[test]
    fn rejects_malformed_ranges() {
        assert!(CompilerConstraint::new("").is_err());
        assert!(CompilerConstraint::new("latest").is_err());
        assert!(CompilerConstraint::new("^0.5.x").is_err());
        assert!(CompilerConstraint::new("0.5.16.2").is_err());
        assert!(CompilerConstraint::new(">=0.5").is_err());
    }

    #[test]
    fn invalid_constraint_error_names_the_input() {
        let err = CompilerConstraint::new("latest").unwrap_err();
        assert!(matches!(err, DomainError::InvalidConstraint(ref s) if s == "latest"));
    }
}
