//! Conversation store: the append-only transcript and the input draft.

use super::message::Message;
use crate::core::question::Question;

/// Owned conversation state for one session
///
/// The transcript only grows. Messages are kept in the order they were
/// appended and there is no way to remove or edit one. The draft is the
/// text the user is currently typing and is independent of the transcript.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    messages: Vec<Message>,
    draft: String,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message.
    ///
    /// Blank (empty or whitespace-only) text is ignored and `None` is returned.
    pub fn append_user(&mut self, text: impl Into<String>) -> Option<&Message> {
        let question = Question::try_new(text)?;
        self.messages.push(Message::user(question));
        self.messages.last()
    }

    /// Append an assistant message with the text as supplied, empty included.
    pub fn append_assistant(&mut self, text: impl Into<String>) -> &Message {
        self.messages.push(Message::assistant(text));
        // Just pushed, so the transcript is non-empty.
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }
}
