//! Provider clients for the Shankhnaad guidance engine.
//!
//! Each remote backend gets one client owning its request/response mapping
//! and HTTP error classification. Clients never leak raw transport errors;
//! everything is classified into [`ProviderError`] so the orchestrator can
//! decide whether to fall back.

pub mod enhancer;
pub mod factory;
pub mod protocol;
pub mod provider;
pub mod providers;

pub use enhancer::enhance_prompt;
pub use factory::{build_image_provider, build_text_chain};
pub use provider::{ChatMessage, ChatRequest, ChatRole, ProviderError, Result, TextProvider};
pub use providers::{GeminiProvider, OpenRouterProvider, PollinationsProvider};
