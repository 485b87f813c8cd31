//! Fixed user-facing reply strings.
//!
//! Every refusal and failure path produces one of these, so the UI never has
//! to render raw provider errors.

use shankhnaad_core::ErrorKind;

pub const NOT_CONFIGURED: &str = "No AI provider is configured. Please add an OpenRouter or \
Gemini API key to your Shankhnaad configuration and try again.";

pub const POLICY_REFUSAL: &str = "I cannot create that image. Shankhnaad only generates \
devotional and respectful artwork; please rephrase your request.";

pub const IMAGE_SUCCESS: &str = "Here is the image you asked for. Hare Krishna!";

pub const VERSE_NOT_FOUND: &str = "That verse is not in my copy of the Bhagavad-gita. Please \
check the chapter and verse numbers.";

pub const IMAGE_FALLBACK: &str = "The image service could not fulfil this request, so here is a \
piece of devotional placeholder art instead.";

/// Message shown when the whole provider chain has been exhausted; phrased
/// per the last failure seen.
pub fn failure_message(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::RateLimited => {
            "The AI services are receiving too many requests right now. Please wait a moment and \
             try again."
        }
        ErrorKind::Network => {
            "The AI services could not be reached. Please check your connection and try again."
        }
        ErrorKind::Server => {
            "The AI services are having trouble at the moment. Please try again shortly."
        }
        ErrorKind::Auth => {
            "An API key was rejected. Please check your Shankhnaad provider credentials."
        }
        ErrorKind::Forbidden => {
            "Access to the AI service was denied. Please check your account and credentials."
        }
        ErrorKind::UnsupportedInput => {
            "None of the configured providers can handle this kind of input."
        }
        ErrorKind::None | ErrorKind::Unknown => {
            "Something went wrong while generating a response. Please try again."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_kind_gets_a_distinct_message() {
        let kinds = [
            ErrorKind::Auth,
            ErrorKind::Forbidden,
            ErrorKind::RateLimited,
            ErrorKind::Server,
            ErrorKind::Network,
            ErrorKind::UnsupportedInput,
            ErrorKind::Unknown,
        ];
        let messages: Vec<&str> = kinds.iter().map(|k| failure_message(*k)).collect();
        for message in &messages {
            assert!(!message.is_empty());
        }
        let mut unique = messages.clone();
        unique.sort();
        unique.dedup();
        // Unknown and None intentionally share a message; everything else is distinct.
        assert_eq!(unique.len(), messages.len());
    }
}
