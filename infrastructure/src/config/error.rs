//! Error types for configuration loading

use thiserror::Error;

/// Errors that can occur while loading or resolving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("No API key configured: set the {env} environment variable or [gemini] api_key")]
    MissingApiKey { env: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
