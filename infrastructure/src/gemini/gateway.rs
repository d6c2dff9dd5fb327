//! HTTP gateway for the Gemini `generateContent` endpoint

use super::protocol::{GenerateContentRequest, parse_completion};
use askai_application::{CompletionGateway, GatewayError};
use askai_domain::{Completion, Question};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

/// Resolved connection settings for [`GeminiGateway`]
#[derive(Clone, PartialEq, Eq)]
pub struct GeminiSettings {
    /// Full `generateContent` URL
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
}

impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

/// Completion gateway backed by the Gemini REST API
///
/// The key travels as the `key` query parameter. No timeout is configured
/// beyond reqwest's defaults and failed requests are never retried.
pub struct GeminiGateway {
    client: reqwest::Client,
    settings: GeminiSettings,
}

impl GeminiGateway {
    pub fn new(settings: GeminiSettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ask-ai/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Configuration(e.to_string()))?;

        Ok(Self { client, settings })
    }

    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }
}

/// Error for a response that is not `200 OK`
pub(crate) fn status_error(status: StatusCode) -> GatewayError {
    GatewayError::Status {
        code: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    }
}

/// Error for a request that produced no response.
///
/// The URL is stripped because it carries the API key.
fn transport_error(error: reqwest::Error) -> GatewayError {
    GatewayError::Transport(error.without_url().to_string())
}

#[async_trait]
impl CompletionGateway for GeminiGateway {
    fn model(&self) -> &str {
        &self.settings.model
    }

    async fn generate(&self, question: &Question) -> Result<Completion, GatewayError> {
        let body = GenerateContentRequest::single_question(question.content());

        debug!(
            "POST {} ({} bytes of question)",
            self.settings.endpoint,
            question.content().len()
        );

        let response = self
            .client
            .post(&self.settings.endpoint)
            .query(&[("key", self.settings.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            let detail = response.text().await.unwrap_or_default();
            debug!("Completion request failed with {}: {}", status, detail);
            return Err(status_error(status));
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        debug!("Completion response: {} bytes", bytes.len());

        Ok(parse_completion(&bytes))
    }
}
