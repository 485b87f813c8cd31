pub mod config;
pub mod message;
pub mod result;

pub use config::{GeminiConfig, ImageConfig, OpenRouterConfig, ProviderConfigs, ShankhnaadConfig};
pub use message::{ConversationTurn, Feedback, MediaAttachment, MediaKind, Role, TurnBody};
pub use result::{ErrorKind, ImageLocator, ImageResult, ImageSource, ProviderResult, TurnOutcome};
