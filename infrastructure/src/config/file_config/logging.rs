//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL conversation log path. Disabled when unset.
    pub conversation_log: Option<String>,
    /// Diagnostic log file used while the TUI owns the terminal
    pub log_file: Option<String>,
}
