//! Completion service configuration from TOML (`[gemini]` section)

use crate::config::ConfigError;
use crate::gemini::GeminiSettings;
use serde::{Deserialize, Serialize};

/// Raw Gemini API configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Base URL of the Generative Language API.
    pub base_url: String,
    /// Model used to build the default endpoint.
    pub model: String,
    /// Full endpoint URL. Overrides `base_url` and `model` when set.
    pub api_url: Option<String>,
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use env var instead).
    pub api_key: Option<String>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_url: None,
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
        }
    }
}

impl FileGeminiConfig {
    /// The `generateContent` URL requests are posted to
    pub fn endpoint(&self) -> String {
        match &self.api_url {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => format!(
                "{}/models/{}:generateContent",
                self.base_url.trim_end_matches('/'),
                self.model
            ),
        }
    }

    /// Resolve the API key, preferring an explicit `api_key` over the
    /// environment variable named by `api_key_env`.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Same as [`Self::resolve_api_key`] with a custom environment lookup
    pub fn resolve_api_key_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<String, ConfigError> {
        if let Some(key) = self.api_key.as_deref().map(str::trim)
            && !key.is_empty()
        {
            return Ok(key.to_string());
        }

        lookup(&self.api_key_env)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey {
                env: self.api_key_env.clone(),
            })
    }

    /// Everything the gateway needs, with the key resolved
    pub fn to_settings(&self) -> Result<GeminiSettings, ConfigError> {
        let endpoint = self.endpoint();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "gemini endpoint must be an http(s) URL, got '{}'",
                endpoint
            )));
        }

        Ok(GeminiSettings {
            endpoint,
            api_key: self.resolve_api_key()?,
            model: self.model.clone(),
        })
    }
}
