//! Port for the structured conversation log.
//!
//! Every transcript change and every failed request is reported as a
//! [`ConversationEvent`]. Adapters decide where the record goes; the
//! controller never reads it back.

use askai_domain::RequestId;
use serde::Serialize;

/// What happened in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationEventKind {
    /// A question was accepted and added to the transcript
    UserMessage,
    /// An answer (or the fallback text) was added to the transcript
    AssistantMessage,
    /// The request for a question failed
    RequestFailed,
}

impl ConversationEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationEventKind::UserMessage => "user_message",
            ConversationEventKind::AssistantMessage => "assistant_message",
            ConversationEventKind::RequestFailed => "request_failed",
        }
    }
}

impl std::fmt::Display for ConversationEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One conversation log record, tied to the submission it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationEvent {
    #[serde(rename = "type")]
    pub kind: ConversationEventKind,
    pub request_id: RequestId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversationEvent {
    pub fn user_message(request_id: RequestId, text: impl Into<String>) -> Self {
        Self {
            kind: ConversationEventKind::UserMessage,
            request_id,
            model: None,
            text: Some(text.into()),
            error: None,
        }
    }

    pub fn assistant_message(
        request_id: RequestId,
        model: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind: ConversationEventKind::AssistantMessage,
            request_id,
            model: Some(model.into()),
            text: Some(text.into()),
            error: None,
        }
    }

    pub fn request_failed(request_id: RequestId, error: impl Into<String>) -> Self {
        Self {
            kind: ConversationEventKind::RequestFailed,
            request_id,
            model: None,
            text: None,
            error: Some(error.into()),
        }
    }
}

/// Sink for conversation events.
///
/// `log` is synchronous and infallible; implementations swallow their own
/// I/O failures.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Used when no conversation log is configured
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
