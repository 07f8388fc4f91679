use super::config::GeminiConfig;
use super::convert::{self, GenerateContentRequest, GenerateContentResponse};
use async_stream::try_stream;
use async_trait::async_trait;
use reqwest::Client;
use starter_core::{Llm, LlmRequest, LlmResponseStream, Result, StarterError};

/// Hosted Gemini model addressed by id.
pub struct GeminiModel {
    client: Client,
    config: GeminiConfig,
}

impl GeminiModel {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        Self::from_config(GeminiConfig::new(api_key, model))
    }

    pub fn from_config(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| StarterError::Model(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl Llm for GeminiModel {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn generate_content(&self, request: LlmRequest) -> Result<LlmResponseStream> {
        let url = self.config.generate_content_url();
        let body = convert::build_request(&request);
        let client = self.client.clone();
        let api_key = self.config.api_key.clone();

        tracing::debug!(model = %self.config.model, tools = body.tools.len(), "sending Gemini request");

        let response_stream = try_stream! {
            let parsed = post_generate_content(&client, &url, &api_key, &body).await?;
            yield convert::from_response(&parsed);
        };

        Ok(Box::pin(response_stream))
    }
}

async fn post_generate_content(
    client: &Client,
    url: &str,
    api_key: &str,
    body: &GenerateContentRequest,
) -> Result<GenerateContentResponse> {
    let response = client
        .post(url)
        .header("x-goog-api-key", api_key)
        .json(body)
        .send()
        .await
        .map_err(|e| StarterError::Model(format!("Gemini request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(StarterError::Model(format!("Gemini API error ({}): {}", status, error_text)));
    }

    response
        .json()
        .await
        .map_err(|e| StarterError::Model(format!("Gemini response parse error: {}", e)))
}
