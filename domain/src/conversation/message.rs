//! Conversation message entity

use crate::core::question::Question;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    User,
    Assistant,
}

impl Origin {
    /// Display label for transcript rendering
    pub fn label(&self) -> &'static str {
        match self {
            Origin::User => "You",
            Origin::Assistant => "AI",
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Origin::User)
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::User => write!(f, "user"),
            Origin::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single transcript entry (Entity)
///
/// Fields are private: once a message is in the transcript it cannot change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    text: String,
    origin: Origin,
    created_at: DateTime<Utc>,
}

impl Message {
    /// A user message. Taking a [`Question`] keeps user text non-blank.
    pub fn user(question: Question) -> Self {
        Self {
            text: question.into_content(),
            origin: Origin::User,
            created_at: Utc::now(),
        }
    }

    /// An assistant message with the text exactly as provided.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Assistant,
            created_at: Utc::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_user(&self) -> bool {
        self.origin.is_user()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let msg = Message::user(Question::try_new("Hi").unwrap());
        assert_eq!(msg.text(), "Hi");
        assert_eq!(msg.origin(), Origin::User);
        assert!(msg.is_user());
    }

    #[test]
    fn test_assistant_message_keeps_empty_text() {
        let msg = Message::assistant("");
        assert_eq!(msg.text(), "");
        assert_eq!(msg.origin(), Origin::Assistant);
    }

    #[test]
    fn test_origin_labels() {
        assert_eq!(Origin::User.label(), "You");
        assert_eq!(Origin::Assistant.label(), "AI");
        assert_eq!(Origin::Assistant.to_string(), "assistant");
    }
}
