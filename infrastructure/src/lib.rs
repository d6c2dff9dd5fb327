//! Infrastructure layer for ask-ai
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileConfig, FileGeminiConfig, FileLoggingConfig, FileOutputConfig,
};
pub use gemini::{GeminiGateway, GeminiSettings};
pub use logging::JsonlConversationLogger;
