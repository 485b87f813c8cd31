//! Gemini `generateContent` wire shape.
//!
//! Messages are "contents", the assistant role is "model", content is an
//! array of parts, and the system instruction travels outside the message
//! list. Inline media rides as a base64 `inlineData` part.

use serde::{Deserialize, Serialize};

use crate::provider::{ChatRequest, ChatRole};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<GeminiInlineData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiInlineData {
    pub mime_type: String,
    /// Base64-encoded bytes.
    pub data: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidate {
    pub content: GeminiContent,
}

impl GenerateContentRequest {
    pub fn from_chat(request: &ChatRequest) -> Self {
        let system_instruction = if request.system_instruction.is_empty() {
            None
        } else {
            Some(GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: Some(request.system_instruction.clone()),
                    inline_data: None,
                }],
            })
        };

        let contents = request
            .messages
            .iter()
            .map(|message| {
                let mut parts = vec![GeminiPart {
                    text: Some(message.text.clone()),
                    inline_data: None,
                }];
                if let Some(media) = &message.media {
                    parts.push(GeminiPart {
                        text: None,
                        inline_data: Some(GeminiInlineData {
                            mime_type: media.mime_type.clone(),
                            data: media.data.clone(),
                        }),
                    });
                }
                GeminiContent {
                    role: Some(
                        match message.role {
                            ChatRole::User => "user",
                            ChatRole::Model => "model",
                        }
                        .to_string(),
                    ),
                    parts,
                }
            })
            .collect();

        Self {
            contents,
            system_instruction,
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ChatMessage;
    use shankhnaad_core::MediaAttachment;

    #[test]
    fn maps_roles_to_user_and_model() {
        let request = ChatRequest {
            system_instruction: "persona".to_string(),
            messages: vec![ChatMessage::user("q"), ChatMessage::model("a")],
        };
        let wire = GenerateContentRequest::from_chat(&request);
        assert_eq!(wire.contents[0].role.as_deref(), Some("user"));
        assert_eq!(wire.contents[1].role.as_deref(), Some("model"));
        assert!(wire.system_instruction.is_some());
    }

    #[test]
    fn media_becomes_inline_data_part() {
        let request = ChatRequest {
            system_instruction: String::new(),
            messages: vec![ChatMessage::user("what is this?")
                .with_media(MediaAttachment::new("image/png", b"pixels"))],
        };
        let wire = GenerateContentRequest::from_chat(&request);
        let parts = &wire.contents[0].parts;
        assert_eq!(parts.len(), 2);
        let inline = parts[1].inline_data.as_ref().unwrap();
        assert_eq!(inline.mime_type, "image/png");

        // Serialized field names follow the Gemini casing.
        let json = serde_json::to_string(&wire).unwrap();
        assert!(json.contains("inlineData"));
        assert!(json.contains("mimeType"));
    }

    #[test]
    fn response_text_joins_parts() {
        let raw = r#"{"candidates": [{"content": {"role": "model",
            "parts": [{"text": "one "}, {"text": "two"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text().as_deref(), Some("one two"));
    }

    #[test]
    fn empty_candidates_yield_no_text() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(response.text().is_none());
    }
}
