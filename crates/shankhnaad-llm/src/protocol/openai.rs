//! OpenAI-compatible chat-completions shape, as served by OpenRouter.

use serde::{Deserialize, Serialize};

use crate::provider::{ChatRequest, ChatRole};

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionChoice {
    pub message: ChatCompletionMessage,
}

impl ChatCompletionRequest {
    /// Map the neutral request: system instruction becomes a leading system
    /// message, model turns become "assistant". Media is not representable
    /// here; the client rejects media-bearing requests before conversion.
    pub fn from_chat(model: &str, request: &ChatRequest) -> Self {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        if !request.system_instruction.is_empty() {
            messages.push(ChatCompletionMessage {
                role: "system".to_string(),
                content: request.system_instruction.clone(),
            });
        }
        for message in &request.messages {
            messages.push(ChatCompletionMessage {
                role: match message.role {
                    ChatRole::User => "user".to_string(),
                    ChatRole::Model => "assistant".to_string(),
                },
                content: message.text.clone(),
            });
        }
        Self {
            model: model.to_string(),
            messages,
            max_tokens: Some(1000),
            temperature: Some(0.7),
        }
    }
}

impl ChatCompletionResponse {
    pub fn text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ChatMessage;

    #[test]
    fn maps_roles_and_system_instruction() {
        let request = ChatRequest {
            system_instruction: "be kind".to_string(),
            messages: vec![
                ChatMessage::user("hi"),
                ChatMessage::model("hello"),
                ChatMessage::user("tell me more"),
            ],
        };
        let wire = ChatCompletionRequest::from_chat("test-model", &request);
        let roles: Vec<&str> = wire.messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, ["system", "user", "assistant", "user"]);
        assert_eq!(wire.messages[0].content, "be kind");
    }

    #[test]
    fn empty_system_instruction_is_omitted() {
        let request = ChatRequest {
            system_instruction: String::new(),
            messages: vec![ChatMessage::user("hi")],
        };
        let wire = ChatCompletionRequest::from_chat("m", &request);
        assert_eq!(wire.messages.len(), 1);
        assert_eq!(wire.messages[0].role, "user");
    }

    #[test]
    fn parses_completion_response() {
        let raw = r#"{"choices": [{"message": {"role": "assistant", "content": "answer"}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), Some("answer"));
    }

    #[test]
    fn empty_choices_yield_no_text() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(response.text().is_none());
    }
}
