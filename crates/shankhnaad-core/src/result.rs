//! Normalized results handed back to the caller.
//!
//! The UI layer only ever sees these shapes; provider-specific responses are
//! normalized before they leave the orchestrator.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Classified failure category of a provider call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    #[default]
    None,
    Auth,
    Forbidden,
    RateLimited,
    Server,
    Network,
    UnsupportedInput,
    Unknown,
}

/// Normalized output of any text-completion attempt. `text` is always a
/// displayable string, even on failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderResult {
    pub text: String,
    pub succeeded: bool,
    pub error_kind: ErrorKind,
}

impl ProviderResult {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            succeeded: true,
            error_kind: ErrorKind::None,
        }
    }

    pub fn failed(text: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            text: text.into(),
            succeeded: false,
            error_kind: kind,
        }
    }
}

/// Where a returned image came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    Generated,
    Placeholder,
}

/// Handle to the image bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImageLocator {
    /// Fetched and cached on the local filesystem.
    Cached { path: PathBuf },
    /// Remote URL; the fetch-and-cache step failed or was skipped.
    Remote { url: String },
    /// Self-contained data URI (placeholder art).
    DataUri { uri: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageResult {
    pub source: ImageSource,
    pub locator: ImageLocator,
}

/// Everything produced by one user turn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurnOutcome {
    pub result: ProviderResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageResult>,
}

impl TurnOutcome {
    pub fn text_only(result: ProviderResult) -> Self {
        Self { result, image: None }
    }

    pub fn with_image(result: ProviderResult, image: ImageResult) -> Self {
        Self {
            result,
            image: Some(image),
        }
    }
}
