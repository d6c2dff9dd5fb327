//! Configuration file loading for ask-ai
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ASK_AI_*` environment variables (nested keys separated by `__`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./ask-ai.toml` or `./.ask-ai.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/ask-ai/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{FileConfig, FileGeminiConfig, FileLoggingConfig, FileOutputConfig};
pub use loader::ConfigLoader;
