//! Error Types
//!
//! Domain-specific error types layered by architectural boundary.

use thiserror::Error;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Network \"{0}\" is already registered")]
    DuplicateNetwork(String),

    #[error("Invalid network entry: {0:?}")]
    InvalidEntry(Vec<String>),

    #[error("Invalid compiler constraint: {0}")]
    InvalidConstraint(String),
}

/// Errors raised when constructing a signing provider from an entry
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Signing credential \"{0}\" is not set")]
    MissingCredential(String),

    #[error("Invalid signing credential: {0}")]
    InvalidCredential(String),
}

/// Errors raised while capturing the process environment snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Environment capture error: {0}")]
    Capture(#[from] config::ConfigError),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{resource} \"{name}\" not found")]
    NotFound { resource: String, name: String },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl UseCaseError {
    /// Get the machine-readable error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Domain(DomainError::DuplicateNetwork(_)) => "CONFLICT",
            Self::Domain(DomainError::InvalidEntry(_) | DomainError::InvalidConstraint(_)) => {
                "VALIDATION_ERROR"
            }
            Self::Provider(ProviderError::MissingCredential(_)) => "MISSING_CREDENTIAL",
            Self::Provider(ProviderError::InvalidCredential(_)) => "INVALID_CREDENTIAL",
        }
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        DomainError::InvalidEntry(messages)
    }
}
