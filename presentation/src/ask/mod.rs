//! One-shot mode: ask a single question and print the answer
//!
//! The question goes through the same controller as the interactive chat,
//! so validation, fallback text and error messages are identical.

use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::ThinkingSpinner;
use askai_application::{AnswerRequestController, SubmitOutcome};
use std::io::Write;

/// Ask `question` once. Prints the answer to stdout, or the error to stderr.
///
/// Returns `None` when the question is blank and nothing was sent.
pub async fn ask_once(
    controller: &mut AnswerRequestController,
    question: &str,
    show_progress: bool,
) -> Option<SubmitOutcome> {
    let spinner = if show_progress {
        ThinkingSpinner::start(controller.gateway().model())
    } else {
        ThinkingSpinner::hidden()
    };

    let outcome = controller.submit_text(question).await;
    spinner.finish();

    match &outcome {
        Some(SubmitOutcome::Answered) | Some(SubmitOutcome::Degraded) => {
            if let Some(answer) = controller.messages().last() {
                print!("{}", ConsoleFormatter::format_answer(answer.text()));
                let _ = std::io::stdout().flush();
            }
            if matches!(outcome, Some(SubmitOutcome::Degraded)) {
                eprint!("{}", ConsoleFormatter::format_degraded_notice());
            }
        }
        Some(SubmitOutcome::Failed { message }) => {
            eprint!("{}", ConsoleFormatter::format_error(message));
        }
        None => {
            eprint!("{}", ConsoleFormatter::format_error("Question must not be blank."));
        }
    }

    outcome
}
