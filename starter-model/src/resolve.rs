//! Turns a [`ModelBinding`] into a callable model.

use crate::{GeminiModel, OpenAICompatible, OpenAICompatibleConfig};
use starter_core::{Llm, ModelBinding, Result};
use std::sync::Arc;

/// Read the hosted-model key. `GOOGLE_API_KEY` wins over `GEMINI_API_KEY`; absent yields empty.
pub fn hosted_api_key_from_env() -> String {
    std::env::var("GOOGLE_API_KEY")
        .or_else(|_| std::env::var("GEMINI_API_KEY"))
        .unwrap_or_default()
}

/// Resolve a binding, taking the hosted key from the environment.
///
/// No network traffic happens here.
pub fn resolve_model(binding: &ModelBinding) -> Result<Arc<dyn Llm>> {
    resolve_model_with_key(binding, &hosted_api_key_from_env())
}

pub fn resolve_model_with_key(binding: &ModelBinding, hosted_api_key: &str) -> Result<Arc<dyn Llm>> {
    match binding {
        ModelBinding::Hosted(hosted) => {
            if hosted_api_key.is_empty() {
                tracing::warn!(model = %hosted.model_id, "no hosted API key set; calls will be rejected");
            }
            Ok(Arc::new(GeminiModel::new(hosted_api_key, &hosted.model_id)?))
        }
        ModelBinding::CustomEndpoint(endpoint) => {
            if endpoint.api_key.is_empty() {
                tracing::warn!(
                    model = %endpoint.model_id,
                    base_url = %endpoint.base_url,
                    "no API key set for custom endpoint; calls will be rejected"
                );
            }
            let config = OpenAICompatibleConfig::new(&endpoint.api_key, &endpoint.model_id)
                .with_base_url(&endpoint.base_url);
            Ok(Arc::new(OpenAICompatible::new(config)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_custom_endpoint_with_empty_key() {
        let binding =
            ModelBinding::custom_endpoint("openai/openai/gpt-oss-20b", "https://api.groq.com/openai/v1", "");
        let llm = resolve_model(&binding).unwrap();
        assert_eq!(llm.name(), "openai/openai/gpt-oss-20b");
    }

    #[test]
    fn test_resolve_hosted_without_key() {
        let llm = resolve_model_with_key(&ModelBinding::hosted("gemini-2.0-flash-exp"), "").unwrap();
        assert_eq!(llm.name(), "gemini-2.0-flash-exp");
    }
}
