//! Completion Gateway port
//!
//! Defines the interface for asking the external completion service a question.

use askai_domain::{Completion, Question};
use async_trait::async_trait;
use thiserror::Error;

/// Shown when a failure carries no usable description.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while generating the answer.";

/// Errors that can occur during completion gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The service answered with a non-success HTTP status
    #[error("API Error: {code} - {reason}")]
    Status { code: u16, reason: String },

    /// The request never produced a response (connect, TLS, body read, ...)
    #[error("{0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GatewayError {
    /// Human-readable message for the error banner.
    ///
    /// Falls back to [`GENERIC_FAILURE_MESSAGE`] when the error has no text.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Gateway to the completion service
///
/// Each call is stateless from the service's point of view: only the given
/// question is sent, never earlier turns. Implementations (adapters) live in
/// the infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Name of the model answering questions, for display and logs
    fn model(&self) -> &str;

    /// Ask a single question.
    ///
    /// `Ok` with [`Completion::missing`] means the call succeeded but the
    /// response had no answer in it.
    async fn generate(&self, question: &Question) -> Result<Completion, GatewayError>;
}
