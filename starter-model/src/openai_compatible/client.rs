//! Client for any endpoint speaking the chat-completions protocol.

use super::config::OpenAICompatibleConfig;
use super::convert::{self, ChatCompletionRequest, ChatCompletionResponse};
use async_stream::try_stream;
use async_trait::async_trait;
use reqwest::Client;
use starter_core::{Llm, LlmRequest, LlmResponseStream, Result, StarterError};

/// Routing prefix carried in model ids like `openai/gpt-oss-20b`. Not part of the wire name.
const ROUTING_PREFIX: &str = "openai/";

/// Chat-completions client.
///
/// Construction never touches the network. A missing or wrong key surfaces as a
/// [`StarterError::Model`] on the first call.
///
/// # Example
///
/// ```rust,no_run
/// use starter_model::{OpenAICompatible, OpenAICompatibleConfig};
///
/// let client = OpenAICompatible::new(
///     OpenAICompatibleConfig::new(std::env::var("OPENAI_API_KEY").unwrap_or_default(), "openai/openai/gpt-oss-20b")
///         .with_base_url("https://api.groq.com/openai/v1"),
/// )?;
/// # Ok::<(), starter_core::StarterError>(())
/// ```
pub struct OpenAICompatible {
    client: Client,
    config: OpenAICompatibleConfig,
}

impl OpenAICompatible {
    pub fn new(config: OpenAICompatibleConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| StarterError::Model(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &OpenAICompatibleConfig {
        &self.config
    }

    /// Model name as the endpoint expects it.
    pub fn wire_model(&self) -> &str {
        self.config.model.strip_prefix(ROUTING_PREFIX).unwrap_or(&self.config.model)
    }
}

#[async_trait]
impl Llm for OpenAICompatible {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn generate_content(&self, request: LlmRequest) -> Result<LlmResponseStream> {
        let url = self.config.chat_completions_url();
        let body = convert::build_request(self.wire_model(), &request, self.config.max_tokens);
        let client = self.client.clone();
        let api_key = self.config.api_key.clone();
        let provider = self.config.provider_name.clone();

        tracing::debug!(provider = %provider, model = %body.model, url = %url, "sending chat completion request");

        let response_stream = try_stream! {
            let parsed = post_chat_completion(&client, &url, &api_key, &body, &provider).await?;
            yield convert::from_response(&parsed);
        };

        Ok(Box::pin(response_stream))
    }
}

async fn post_chat_completion(
    client: &Client,
    url: &str,
    api_key: &str,
    body: &ChatCompletionRequest,
    provider: &str,
) -> Result<ChatCompletionResponse> {
    let response = client
        .post(url)
        .bearer_auth(api_key)
        .json(body)
        .send()
        .await
        .map_err(|e| StarterError::Model(format!("{} request failed: {}", provider, e)))?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(StarterError::Model(format!(
            "{} API error ({}): {}",
            provider, status, error_text
        )));
    }

    response
        .json()
        .await
        .map_err(|e| StarterError::Model(format!("{} response parse error: {}", provider, e)))
}
