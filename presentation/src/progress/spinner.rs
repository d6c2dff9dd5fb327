//! Spinner shown on stderr while a question is being answered

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// "Thinking..." spinner around a single request
pub struct ThinkingSpinner {
    bar: ProgressBar,
}

impl ThinkingSpinner {
    /// Start a spinner on stderr
    pub fn start(model: &str) -> Self {
        Self::with_target(model, ProgressDrawTarget::stderr())
    }

    /// A spinner that draws nothing (quiet mode, non-terminal output)
    pub fn hidden() -> Self {
        Self::with_target("", ProgressDrawTarget::hidden())
    }

    fn with_target(model: &str, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(None, target);
        bar.set_style(Self::spinner_style());
        bar.set_prefix(model.to_string());
        bar.set_message("Thinking...");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.dim} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Remove the spinner line
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
