//! Wire types for the `generateContent` endpoint
//!
//! Only the fields this client reads or writes are modelled; everything else
//! in a response is ignored.

use askai_domain::Completion;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Request body: `{"contents":[{"parts":[{"text": ...}]}]}`
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A request carrying one question and no earlier turns
    pub fn single_question(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(text.into()),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response body, reduced to `candidates[].content.parts[].text`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`, if every step is present
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

/// Map a successful response body to a [`Completion`].
///
/// A body that is not valid JSON, or that lacks the answer path, yields
/// [`Completion::missing`] rather than an error.
pub fn parse_completion(body: &[u8]) -> Completion {
    match serde_json::from_slice::<GenerateContentResponse>(body) {
        Ok(response) => match response.first_text() {
            Some(text) => Completion::answered(text),
            None => {
                let finish_reason = response
                    .candidates
                    .first()
                    .and_then(|c| c.finish_reason.as_deref())
                    .unwrap_or("none");
                warn!(
                    "Response had {} candidate(s) but no answer text (finish reason: {})",
                    response.candidates.len(),
                    finish_reason
                );
                Completion::missing()
            }
        },
        Err(e) => {
            warn!("Could not decode response body: {}", e);
            Completion::missing()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = GenerateContentRequest::single_question("What is 2+2?");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "contents": [{ "parts": [{ "text": "What is 2+2?" }] }]
            })
        );
    }

    #[test]
    fn test_parse_full_response() {
        let body = br#"{
            "candidates": [{
                "content": { "parts": [{ "text": "4" }], "role": "model" },
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": { "promptTokenCount": 6 }
        }"#;
        assert_eq!(parse_completion(body), Completion::answered("4"));
    }

    #[test]
    fn test_only_first_part_is_used() {
        let body = br#"{"candidates":[{"content":{"parts":[{"text":"one"},{"text":"two"}]}}]}"#;
        assert_eq!(parse_completion(body), Completion::answered("one"));
    }

    #[test]
    fn test_empty_candidates_is_missing() {
        assert_eq!(parse_completion(br#"{"candidates":[]}"#), Completion::missing());
        assert_eq!(parse_completion(b"{}"), Completion::missing());
    }

    #[test]
    fn test_missing_parts_is_missing() {
        let body = br#"{"candidates":[{"content":{"parts":[]},"finishReason":"SAFETY"}]}"#;
        assert_eq!(parse_completion(body), Completion::missing());

        let body = br#"{"candidates":[{"finishReason":"SAFETY"}]}"#;
        assert_eq!(parse_completion(body), Completion::missing());
    }

    #[test]
    fn test_part_without_text_is_missing() {
        let body = br#"{"candidates":[{"content":{"parts":[{"inlineData":{}}]}}]}"#;
        assert_eq!(parse_completion(body), Completion::missing());
    }

    #[test]
    fn test_undecodable_body_is_missing() {
        assert_eq!(parse_completion(b"<html>oops</html>"), Completion::missing());
        assert_eq!(parse_completion(b""), Completion::missing());
    }

    #[test]
    fn test_empty_text_is_kept() {
        let body = br#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#;
        assert_eq!(parse_completion(body), Completion::answered(""));
    }
}
