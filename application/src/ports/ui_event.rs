//! UI event types emitted by AnswerRequestController for presentation rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer. Every change to the transcript, the draft, the
//! lifecycle or the error banner is announced here as soon as it happens.

use askai_domain::{Message, RequestLifecycle};

/// Events emitted by AnswerRequestController for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The input draft changed (typed by the user or cleared on settle)
    DraftChanged { draft: String },
    /// A message was appended to the transcript
    MessageAppended(Message),
    /// The request lifecycle moved to a new phase
    LifecycleChanged(RequestLifecycle),
    /// A request failed; `message` is what the error banner should show
    RequestFailed { message: String },
    /// The previous error was cleared by a new submission
    ErrorCleared,
}
