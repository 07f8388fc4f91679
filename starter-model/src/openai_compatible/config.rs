//! Configuration for OpenAI-compatible endpoints.

use serde::{Deserialize, Serialize};

/// Base URL used when none is configured.
pub const DEFAULT_OPENAI_COMPATIBLE_BASE: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAICompatibleConfig {
    /// Provider display name used in error messages.
    pub provider_name: String,
    /// API key. Empty keys are sent as-is and rejected by the backend.
    #[serde(default, skip_serializing)]
    pub api_key: String,
    /// Model name sent in the request body.
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Maximum tokens for output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl OpenAICompatibleConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider_name: "openai-compatible".to_string(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
            max_tokens: None,
        }
    }

    pub fn with_provider_name(mut self, provider_name: impl Into<String>) -> Self {
        self.provider_name = provider_name.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_OPENAI_COMPATIBLE_BASE)
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.effective_base_url().trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = OpenAICompatibleConfig::new("", "openai/gpt-oss-20b");
        assert_eq!(config.effective_base_url(), DEFAULT_OPENAI_COMPATIBLE_BASE);
        assert_eq!(
            config.chat_completions_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn test_custom_base_url_trailing_slash() {
        let config = OpenAICompatibleConfig::new("k", "m").with_base_url("http://localhost:8000/v1/");
        assert_eq!(config.chat_completions_url(), "http://localhost:8000/v1/chat/completions");
    }
}
