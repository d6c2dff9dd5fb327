//! Presentation layer for ask-ai
//!
//! This crate contains CLI definitions, the interactive terminal UI,
//! one-shot console output and progress indicators.

pub mod ask;
pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use ask::ask_once;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::spinner::ThinkingSpinner;
pub use tui::ChatApp;
