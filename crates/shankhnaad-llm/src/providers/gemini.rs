//! Gemini text provider, the multimodal-capable path.

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;

use crate::protocol::gemini::{GenerateContentRequest, GenerateContentResponse};
use crate::provider::{http_client, ChatRequest, ProviderError, Result, TextProvider};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-pro";

pub struct GeminiProvider {
    client: ClientWithMiddleware,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiProvider {
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
impl TextProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn supports_media(&self) -> bool {
        true
    }

    async fn complete(&self, request: &ChatRequest) -> Result<String> {
        let body = GenerateContentRequest::from_chat(request);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        log::debug!("gemini request: model={}", self.model);

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status, &text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Unknown(format!("malformed generateContent response: {e}")))?;

        match parsed.text() {
            Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            _ => Err(ProviderError::Unknown(
                "generateContent response carried no text".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_builders() {
        let provider = GeminiProvider::new("key");
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(provider.model, DEFAULT_MODEL);
        assert!(provider.supports_media());

        let provider = provider.with_model("gemini-1.5-pro");
        assert_eq!(provider.model, "gemini-1.5-pro");
    }

    #[test]
    fn url_embeds_model_and_key() {
        let provider = GeminiProvider::new("k123").with_base_url("https://test.api/v1beta");
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            provider.base_url, provider.model, provider.api_key
        );
        assert_eq!(
            url,
            "https://test.api/v1beta/models/gemini-pro:generateContent?key=k123"
        );
    }
}
