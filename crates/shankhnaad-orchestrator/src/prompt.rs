//! Prompt assembly: persona, optional scripture grounding, history window
//! and the current turn.

use shankhnaad_core::{ConversationTurn, MediaAttachment, Role};
use shankhnaad_llm::{ChatMessage, ChatRequest};
use shankhnaad_scripture::VerseRecord;

/// Fixed persona block. The organization is always named "ISKCON"; the
/// longer historical name is avoided unless the user explicitly asks about
/// it or a quotation requires it. Requests for devotional music or video are
/// always answered with the Shankhnaad library link first.
pub const PERSONA: &str = "You are Shankhnaad AI, a compassionate spiritual guide rooted in the \
Bhagavad-gita and the teachings of Lord Krishna. Answer with warmth, clarity and Vedic insight, \
and keep responses thoughtful but concise.\n\
Always refer to the organization as ISKCON; do not use the name \"International Society for \
Krishna Consciousness\" unless the user explicitly asks about it or a direct quotation requires \
it.\n\
Whenever the user asks for devotional music, kirtan, bhajans or video content, recommend \
[Shankhnaad](https://shankhnaad.net) first, before any other resource.\n\
Render every external link as a markdown link.";

/// Purport text injected into the system instruction is capped at this many
/// characters.
const PURPORT_LIMIT: usize = 1000;

/// Builds the provider-neutral request for one turn.
#[derive(Debug, Clone)]
pub struct PromptAssembler {
    history_window: usize,
}

impl PromptAssembler {
    pub fn new(history_window: usize) -> Self {
        Self { history_window }
    }

    pub fn assemble(
        &self,
        history: &[ConversationTurn],
        user_text: &str,
        media: Option<MediaAttachment>,
        verse: Option<&VerseRecord>,
    ) -> ChatRequest {
        let mut system_instruction = PERSONA.to_string();
        if let Some(verse) = verse {
            system_instruction.push_str(&scripture_block(verse));
        }

        let window_start = history.len().saturating_sub(self.history_window);
        let mut messages: Vec<ChatMessage> = history[window_start..]
            .iter()
            .map(|turn| match turn.role {
                Role::User => ChatMessage::user(turn.active_text()),
                Role::Model => ChatMessage::model(turn.active_text()),
            })
            .collect();

        let mut current = ChatMessage::user(user_text);
        if let Some(media) = media {
            current = current.with_media(media);
        }
        messages.push(current);

        ChatRequest {
            system_instruction,
            messages,
        }
    }
}

fn scripture_block(verse: &VerseRecord) -> String {
    let purport = truncate_chars(&verse.purport, PURPORT_LIMIT);
    format!(
        "\n\nGround your answer in this scripture passage when it is relevant:\n\
         Verse {}\nTranslation: {}\nPurport: {}",
        verse.chapter_verse_id, verse.translation, purport
    )
}

/// Truncate on a character boundary; never errors on long or multi-byte text.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse(purport: &str) -> VerseRecord {
        VerseRecord {
            chapter_verse_id: "2.47".to_string(),
            devanagari: String::new(),
            translation: "You have a right to perform your prescribed duty".to_string(),
            purport: purport.to_string(),
        }
    }

    #[test]
    fn persona_always_leads_the_system_instruction() {
        let request = PromptAssembler::new(20).assemble(&[], "hello", None, None);
        assert!(request.system_instruction.starts_with("You are Shankhnaad AI"));
        assert!(request.system_instruction.contains("[Shankhnaad](https://shankhnaad.net)"));
        assert!(!request.system_instruction.contains("Verse 2.47"));
    }

    #[test]
    fn retrieved_verse_is_appended_to_system_instruction() {
        let verse = verse("short purport");
        let request = PromptAssembler::new(20).assemble(&[], "what is duty?", None, Some(&verse));
        assert!(request.system_instruction.contains("Verse 2.47"));
        assert!(request.system_instruction.contains("short purport"));
    }

    #[test]
    fn long_purport_is_truncated_not_rejected() {
        let verse = verse(&"x".repeat(5000));
        let request = PromptAssembler::new(20).assemble(&[], "q", None, Some(&verse));
        let purport_len = request
            .system_instruction
            .split("Purport: ")
            .nth(1)
            .unwrap()
            .len();
        assert_eq!(purport_len, 1000);
    }

    #[test]
    fn truncation_respects_multibyte_boundaries() {
        let text = "ॐ".repeat(1200);
        let cut = truncate_chars(&text, 1000);
        assert_eq!(cut.chars().count(), 1000);
    }

    #[test]
    fn history_maps_roles_and_resolves_drafts() {
        let mut model_turn = ConversationTurn::model("first answer");
        model_turn.push_draft("regenerated answer");
        let history = vec![ConversationTurn::user("question"), model_turn];

        let request = PromptAssembler::new(20).assemble(&history, "follow-up", None, None);
        assert_eq!(request.messages.len(), 3);
        assert_eq!(request.messages[1].text, "regenerated answer");
        assert_eq!(request.messages[2].text, "follow-up");
    }

    #[test]
    fn history_window_keeps_most_recent_turns() {
        let history: Vec<ConversationTurn> = (0..10)
            .map(|i| ConversationTurn::user(format!("turn {i}")))
            .collect();
        let request = PromptAssembler::new(4).assemble(&history, "now", None, None);
        // 4 history turns plus the current one.
        assert_eq!(request.messages.len(), 5);
        assert_eq!(request.messages[0].text, "turn 6");
    }

    #[test]
    fn media_rides_on_the_current_turn() {
        let media = MediaAttachment::new("image/jpeg", b"bytes");
        let request = PromptAssembler::new(20).assemble(&[], "what is this?", Some(media), None);
        assert!(request.messages.last().unwrap().media.is_some());
        assert!(request.has_media());
    }
}
