//! OpenRouter text provider (OpenAI-compatible chat completions).
//!
//! Text-only: requests carrying media are rejected with `UnsupportedInput`
//! before any network call, so the router can skip this client up front.

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;

use crate::protocol::openai::{ChatCompletionRequest, ChatCompletionResponse};
use crate::provider::{http_client, ChatRequest, ProviderError, Result, TextProvider};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "meta-llama/llama-3.1-405b-instruct";

pub struct OpenRouterProvider {
    client: ClientWithMiddleware,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenRouterProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: http_client(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl TextProvider for OpenRouterProvider {
    fn name(&self) -> &str {
        "openrouter"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<String> {
        if request.has_media() {
            return Err(ProviderError::UnsupportedInput(
                "openrouter path is text-only; media must be routed to a multimodal provider"
                    .to_string(),
            ));
        }

        let body = ChatCompletionRequest::from_chat(&self.model, request);
        log::debug!("openrouter request: model={}", self.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status, &text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Unknown(format!("malformed completion response: {e}")))?;

        match parsed.text() {
            Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            _ => Err(ProviderError::Unknown(
                "completion response carried no text".to_string(),
            )),
        }
    }
}
