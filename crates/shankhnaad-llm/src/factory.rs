//! Provider chain construction.
//!
//! Builds the ordered list of text providers from configuration. A provider
//! with a missing or blank credential is skipped (not an error); the
//! resulting chain may legitimately be empty, which the orchestrator turns
//! into the fixed "please configure" reply.

use std::sync::Arc;

use shankhnaad_core::ShankhnaadConfig;

use crate::provider::TextProvider;
use crate::providers::{GeminiProvider, OpenRouterProvider, PollinationsProvider};

/// Build the text-provider chain sorted by configured priority. The sort is
/// stable, so equal priorities keep the declaration order (OpenRouter before
/// Gemini).
pub fn build_text_chain(config: &ShankhnaadConfig) -> Vec<Arc<dyn TextProvider>> {
    let mut entries: Vec<(u8, Arc<dyn TextProvider>)> = Vec::new();

    if let Some(openrouter) = &config.providers.openrouter {
        if openrouter.api_key.trim().is_empty() {
            log::warn!("openrouter configured without an API key; skipping");
        } else {
            let mut provider = OpenRouterProvider::new(&openrouter.api_key);
            if let Some(base_url) = &openrouter.base_url {
                if !base_url.is_empty() {
                    provider = provider.with_base_url(base_url);
                }
            }
            if let Some(model) = &openrouter.model {
                if !model.is_empty() {
                    provider = provider.with_model(model);
                }
            }
            entries.push((openrouter.priority, Arc::new(provider)));
        }
    }

    if let Some(gemini) = &config.providers.gemini {
        if gemini.api_key.trim().is_empty() {
            log::warn!("gemini configured without an API key; skipping");
        } else {
            let mut provider = GeminiProvider::new(&gemini.api_key);
            if let Some(base_url) = &gemini.base_url {
                if !base_url.is_empty() {
                    provider = provider.with_base_url(base_url);
                }
            }
            if let Some(model) = &gemini.model {
                if !model.is_empty() {
                    provider = provider.with_model(model);
                }
            }
            entries.push((gemini.priority, Arc::new(provider)));
        }
    }

    entries.sort_by_key(|(priority, _)| *priority);
    let chain: Vec<Arc<dyn TextProvider>> =
        entries.into_iter().map(|(_, provider)| provider).collect();

    log::info!(
        "text provider chain: [{}]",
        chain
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    chain
}

/// Build the image client, honoring a configured endpoint override.
pub fn build_image_provider(config: &ShankhnaadConfig) -> PollinationsProvider {
    let mut provider = PollinationsProvider::new();
    if let Some(base_url) = &config.image.base_url {
        if !base_url.is_empty() {
            provider = provider.with_base_url(base_url);
        }
    }
    provider
}
