//! Console output formatter for answers and errors

use colored::Colorize;

/// Formats transcript entries for plain terminal output
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colored output on or off for the whole process
    pub fn set_color_enabled(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Format an answer, followed by a newline
    pub fn format_answer(text: &str) -> String {
        format!("{}\n", text)
    }

    /// Format a request failure for stderr
    pub fn format_error(message: &str) -> String {
        format!("{} {}\n", "Error:".red().bold(), message)
    }

    /// Format a notice that the service sent back no answer
    pub fn format_degraded_notice() -> String {
        format!(
            "{}\n",
            "(the service returned no answer text)".yellow().italic()
        )
    }
}
