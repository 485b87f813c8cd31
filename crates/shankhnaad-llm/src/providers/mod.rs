pub mod gemini;
pub mod openrouter;
pub mod pollinations;

pub use gemini::GeminiProvider;
pub use openrouter::OpenRouterProvider;
pub use pollinations::PollinationsProvider;
