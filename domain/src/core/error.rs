//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("A request is already in flight")]
    RequestInFlight,
}

impl DomainError {
    /// Check if this error is a validation no-op rather than a real failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidQuestion(_) | DomainError::RequestInFlight
        )
    }
}
