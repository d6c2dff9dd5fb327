//! Completion value object

/// Assistant text recorded when a successful response carries no answer.
pub const FALLBACK_ANSWER: &str = "No answer received.";

/// What the completion service returned for one question (Value Object)
///
/// `answer` is `None` when the call succeeded but the response did not
/// contain the expected answer field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Completion {
    pub answer: Option<String>,
}

impl Completion {
    pub fn answered(text: impl Into<String>) -> Self {
        Self {
            answer: Some(text.into()),
        }
    }

    pub fn missing() -> Self {
        Self { answer: None }
    }

    pub fn is_degraded(&self) -> bool {
        self.answer.is_none()
    }

    /// Text to record in the transcript, substituting [`FALLBACK_ANSWER`].
    pub fn into_transcript_text(self) -> String {
        self.answer.unwrap_or_else(|| FALLBACK_ANSWER.to_string())
    }
}
