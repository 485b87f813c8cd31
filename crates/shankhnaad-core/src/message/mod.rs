//! Conversation turns and their content.
//!
//! A model turn carries either a single piece of content or an ordered set of
//! regeneration drafts with one active index. The tagged [`TurnBody`] makes
//! that distinction explicit instead of leaving two optional fields to be
//! reconciled at every read site.

mod media;

pub use media::{MediaAttachment, MediaKind};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::result::ImageResult;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// End-user feedback on a model turn. Ignored on user turns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    #[default]
    None,
    Up,
    Down,
}

/// The textual body of a turn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnBody {
    /// A single piece of content.
    Content { text: String },
    /// Alternative generations for the same turn. `active` always points at
    /// a valid entry; `drafts` is never empty and only ever grows.
    Drafts { drafts: Vec<String>, active: usize },
}

impl TurnBody {
    /// Resolve to the text a reader should currently see.
    pub fn active_text(&self) -> &str {
        match self {
            Self::Content { text } => text,
            Self::Drafts { drafts, active } => {
                drafts.get(*active).map(String::as_str).unwrap_or("")
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    #[serde(default = "generate_id")]
    pub id: String,
    pub role: Role,
    pub body: TurnBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaAttachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_image: Option<ImageResult>,
    #[serde(default)]
    pub feedback: Feedback,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, text)
    }

    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            role,
            body: TurnBody::Content { text: text.into() },
            media: None,
            generated_image: None,
            feedback: Feedback::None,
            created_at: Utc::now(),
        }
    }

    pub fn with_media(mut self, media: MediaAttachment) -> Self {
        self.media = Some(media);
        self
    }

    /// The text currently selected for display or prompt assembly.
    pub fn active_text(&self) -> &str {
        self.body.active_text()
    }

    pub fn draft_count(&self) -> usize {
        match &self.body {
            TurnBody::Content { .. } => 1,
            TurnBody::Drafts { drafts, .. } => drafts.len(),
        }
    }

    /// Append a regenerated draft and select it. A single-content body is
    /// promoted to a draft set keeping the original as the first entry.
    pub fn push_draft(&mut self, text: impl Into<String>) {
        match &mut self.body {
            TurnBody::Content { text: original } => {
                let drafts = vec![std::mem::take(original), text.into()];
                self.body = TurnBody::Drafts { drafts, active: 1 };
            }
            TurnBody::Drafts { drafts, active } => {
                drafts.push(text.into());
                *active = drafts.len() - 1;
            }
        }
    }

    /// Select the previous draft, if any. Never mutates the draft list.
    pub fn prev_draft(&mut self) {
        if let TurnBody::Drafts { active, .. } = &mut self.body {
            *active = active.saturating_sub(1);
        }
    }

    /// Select the next draft, if any. Never mutates the draft list.
    pub fn next_draft(&mut self) {
        if let TurnBody::Drafts { drafts, active } = &mut self.body {
            if *active + 1 < drafts.len() {
                *active += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_text_resolves_content() {
        let turn = ConversationTurn::model("hello");
        assert_eq!(turn.active_text(), "hello");
    }

    #[test]
    fn push_draft_promotes_content_and_selects_new() {
        let mut turn = ConversationTurn::model("first");
        turn.push_draft("second");

        match &turn.body {
            TurnBody::Drafts { drafts, active } => {
                assert_eq!(drafts, &["first".to_string(), "second".to_string()]);
                assert_eq!(*active, 1);
            }
            other => panic!("expected draft set, got {other:?}"),
        }
        assert_eq!(turn.active_text(), "second");
    }

    #[test]
    fn push_draft_appends_exactly_one_and_advances() {
        let mut turn = ConversationTurn::model("a");
        turn.push_draft("b");
        turn.push_draft("c");

        assert_eq!(turn.draft_count(), 3);
        assert_eq!(turn.active_text(), "c");
    }

    #[test]
    fn prev_next_move_within_bounds_without_mutating() {
        let mut turn = ConversationTurn::model("a");
        turn.push_draft("b");

        turn.prev_draft();
        assert_eq!(turn.active_text(), "a");
        // Already at the first draft; stays put.
        turn.prev_draft();
        assert_eq!(turn.active_text(), "a");

        turn.next_draft();
        assert_eq!(turn.active_text(), "b");
        // Already at the last draft; stays put.
        turn.next_draft();
        assert_eq!(turn.active_text(), "b");

        assert_eq!(turn.draft_count(), 2);
    }

    #[test]
    fn prev_next_are_noops_on_single_content() {
        let mut turn = ConversationTurn::model("only");
        turn.prev_draft();
        turn.next_draft();
        assert_eq!(turn.active_text(), "only");
        assert_eq!(turn.draft_count(), 1);
    }

    #[test]
    fn turn_roundtrips_through_json() {
        let mut turn = ConversationTurn::model("a");
        turn.push_draft("b");
        turn.feedback = Feedback::Up;

        let json = serde_json::to_string(&turn).unwrap();
        let back: ConversationTurn = serde_json::from_str(&json).unwrap();
        assert_eq!(back.active_text(), "b");
        assert_eq!(back.feedback, Feedback::Up);
    }
}
