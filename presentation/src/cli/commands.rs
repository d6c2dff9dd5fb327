//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for ask-ai
#[derive(Parser, Debug)]
#[command(name = "ask-ai")]
#[command(author, version, about = "Chat with AI - Ask AI Anything")]
#[command(long_about = r#"
ask-ai sends your question to a generative-language model and shows the answer.

Without a question it opens an interactive chat:
  Enter         Send the question
  Shift+Enter   Insert a line break (Alt+Enter or Ctrl+J also work)
  PgUp/PgDn     Scroll the conversation
  Ctrl+C        Quit

Each question is sent on its own; earlier turns are not included.

The API key is read from $GEMINI_API_KEY unless configured otherwise.

Configuration files are loaded from (in priority order):
1. ASK_AI_* environment variables (e.g. ASK_AI_GEMINI__MODEL)
2. --config <path>     Explicit config file
3. ./ask-ai.toml       Project-level config
4. ~/.config/ask-ai/config.toml   Global config

Example:
  ask-ai "What is 2+2?"
  ask-ai --model gemini-1.5-pro
"#)]
pub struct Cli {
    /// Ask a single question and print the answer (omit for interactive chat)
    pub question: Option<String>,

    /// Model to use (overrides [gemini] model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Full generateContent URL (overrides [gemini] api_url)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner in single-question mode
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write diagnostic logs to this file (interactive mode logs to a file by default)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Append the conversation as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,
}

impl Cli {
    /// Interactive chat unless a question was given
    pub fn is_interactive(&self) -> bool {
        self.question.is_none()
    }
}
