//! Prompt enhancement for image generation.
//!
//! Before hitting the image endpoint, the raw user prompt is rewritten by a
//! text provider for better image fidelity. The sub-call is single-turn and
//! system-free, and walks the same ordered provider chain as ordinary text
//! completion. Every failure is absorbed; the caller falls back to the raw
//! prompt when no provider can help.

use std::sync::Arc;

use crate::provider::{ChatMessage, ChatRequest, TextProvider};

const ENHANCEMENT_INSTRUCTION: &str = "Rewrite the following idea as a vivid, detailed \
image-generation prompt. Describe the subject, setting, lighting and artistic style in plain \
prose of under 150 words. Reply with the rewritten prompt only, no preamble and no formatting.";

/// Ask the provider chain for an enhanced image prompt. Returns `None` when
/// every configured provider fails or answers with empty text.
pub async fn enhance_prompt(chain: &[Arc<dyn TextProvider>], prompt: &str) -> Option<String> {
    let request = ChatRequest {
        system_instruction: String::new(),
        messages: vec![ChatMessage::user(format!(
            "{ENHANCEMENT_INSTRUCTION}\n\n{prompt}"
        ))],
    };

    for provider in chain {
        match provider.complete(&request).await {
            Ok(text) if !text.trim().is_empty() => {
                log::debug!("prompt enhanced by {}", provider.name());
                return Some(text.trim().to_string());
            }
            Ok(_) => {
                log::debug!("{} returned an empty enhancement", provider.name());
            }
            Err(err) => {
                log::debug!("{} could not enhance prompt: {err}", provider.name());
            }
        }
    }
    None
}
