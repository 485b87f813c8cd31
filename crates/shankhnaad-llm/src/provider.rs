use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use thiserror::Error;

use shankhnaad_core::{ErrorKind, MediaAttachment};

/// Per-request timeout. A hung provider must not block the fallback chain.
pub(crate) const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Transient failures (network, 5xx) get one retry before the error is
/// surfaced and the orchestrator moves to the next provider.
pub(crate) const TRANSIENT_RETRIES: u32 = 1;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("authentication rejected: {0}")]
    Auth(String),

    #[error("access forbidden: {0}")]
    Forbidden(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("unexpected provider failure: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, ProviderError>;

impl ProviderError {
    /// Classify a non-2xx response per the error taxonomy: 401 auth,
    /// 403 forbidden, 429 rate limited, everything else server-side.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        match status.as_u16() {
            401 => Self::Auth(body.to_string()),
            403 => Self::Forbidden(body.to_string()),
            429 => Self::RateLimited(body.to_string()),
            code => Self::Server {
                status: code,
                message: body.to_string(),
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Auth(_) => ErrorKind::Auth,
            Self::Forbidden(_) => ErrorKind::Forbidden,
            Self::RateLimited(_) => ErrorKind::RateLimited,
            Self::Server { .. } => ErrorKind::Server,
            Self::Network(_) => ErrorKind::Network,
            Self::UnsupportedInput(_) => ErrorKind::UnsupportedInput,
            Self::Unknown(_) => ErrorKind::Unknown,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<reqwest_middleware::Error> for ProviderError {
    fn from(err: reqwest_middleware::Error) -> Self {
        Self::Network(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

/// One provider-neutral message in the assembled prompt.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub media: Option<MediaAttachment>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            media: None,
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
            media: None,
        }
    }

    pub fn with_media(mut self, media: MediaAttachment) -> Self {
        self.media = Some(media);
        self
    }
}

/// A fully assembled text-completion request: system instruction plus the
/// ordered message sequence, the last message being the current user turn.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    pub system_instruction: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    pub fn has_media(&self) -> bool {
        self.messages.iter().any(|m| m.media.is_some())
    }
}

/// A remote text-completion backend with a declared capability set. The
/// router inspects `supports_media` before dispatch instead of relying on a
/// thrown rejection as a control-flow signal.
#[async_trait]
pub trait TextProvider: Send + Sync {
    fn name(&self) -> &str;

    fn supports_media(&self) -> bool {
        false
    }

    async fn complete(&self, request: &ChatRequest) -> Result<String>;
}

/// Shared HTTP client: request timeout plus one retry for transient errors.
pub(crate) fn http_client() -> ClientWithMiddleware {
    let inner = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .unwrap_or_else(|err| {
            log::warn!("falling back to default HTTP client: {err}");
            reqwest::Client::new()
        });

    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(TRANSIENT_RETRIES);
    ClientBuilder::new(inner)
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build()
}
