//! Turn handling and provider fallback.
//!
//! One entry point, [`Orchestrator::handle_turn`], owns the whole pipeline:
//! intent classification, the content policy gate, scripture retrieval,
//! prompt assembly and the ordered walk over the text-provider chain. Every
//! path returns a normalized [`TurnOutcome`]; no provider error escapes.

use std::sync::Arc;

use shankhnaad_core::{
    ConversationTurn, ErrorKind, MediaAttachment, ProviderResult, ShankhnaadConfig, TurnOutcome,
};
use shankhnaad_llm::{
    build_image_provider, build_text_chain, enhance_prompt, PollinationsProvider, TextProvider,
};
use shankhnaad_scripture::{
    chapter, find_best_verse, format_verse, is_verse_reference, verse_literal, Corpus,
};

use crate::intent::{Intent, IntentClassifier, PatternClassifier};
use crate::placeholder::placeholder_art;
use crate::policy::contains_explicit_content;
use crate::prompt::PromptAssembler;
use crate::replies;

pub struct Orchestrator {
    chain: Vec<Arc<dyn TextProvider>>,
    image: PollinationsProvider,
    classifier: Box<dyn IntentClassifier>,
    assembler: PromptAssembler,
    corpus: Corpus,
}

impl Orchestrator {
    pub fn new(config: &ShankhnaadConfig, corpus: Corpus) -> Self {
        Self {
            chain: build_text_chain(config),
            image: build_image_provider(config),
            classifier: Box::new(PatternClassifier),
            assembler: PromptAssembler::new(config.history_window),
            corpus,
        }
    }

    /// Assemble an orchestrator from explicit parts. Used by tests to inject
    /// fake providers and classifiers.
    pub fn from_parts(
        chain: Vec<Arc<dyn TextProvider>>,
        image: PollinationsProvider,
        classifier: Box<dyn IntentClassifier>,
        assembler: PromptAssembler,
        corpus: Corpus,
    ) -> Self {
        Self {
            chain,
            image,
            classifier,
            assembler,
            corpus,
        }
    }

    /// Handle one user turn. Media always forces the text path; image intent
    /// only applies to pure-text requests.
    pub async fn handle_turn(
        &self,
        history: &[ConversationTurn],
        user_text: &str,
        media: Option<MediaAttachment>,
    ) -> TurnOutcome {
        if media.is_none() && self.classifier.classify(user_text) == Intent::Image {
            return self.handle_image_turn(user_text).await;
        }
        self.handle_text_turn(history, user_text, media).await
    }

    async fn handle_image_turn(&self, user_text: &str) -> TurnOutcome {
        if contains_explicit_content(user_text) {
            log::info!("image request refused by content policy");
            return TurnOutcome::text_only(ProviderResult::ok(replies::POLICY_REFUSAL));
        }

        let prompt = match enhance_prompt(&self.chain, user_text).await {
            Some(enhanced) => enhanced,
            None => {
                log::debug!("no provider enhanced the prompt; using raw text");
                user_text.to_string()
            }
        };

        match self.image.generate(&prompt).await {
            Some(image) => {
                TurnOutcome::with_image(ProviderResult::ok(replies::IMAGE_SUCCESS), image)
            }
            None => {
                log::info!("image endpoint declined; serving placeholder art");
                TurnOutcome::with_image(
                    ProviderResult::ok(replies::IMAGE_FALLBACK),
                    placeholder_art(&prompt),
                )
            }
        }
    }

    /// Answer a literal scripture reference directly from the corpus, with
    /// no provider involvement. `"<n>.<m>"` queries that miss the corpus get
    /// a fixed not-found reply instead of falling through to a provider.
    fn literal_lookup(&self, query: &str) -> Option<String> {
        let records = self.corpus.records();
        if let Some(verse) = verse_literal(records, query) {
            return Some(format_verse(verse));
        }
        if is_verse_reference(query) {
            return Some(replies::VERSE_NOT_FOUND.to_string());
        }
        match chapter(records, query) {
            Some(verses) if !verses.is_empty() => Some(
                verses
                    .iter()
                    .map(|v| format_verse(v))
                    .collect::<Vec<_>>()
                    .join("\n\n"),
            ),
            _ => None,
        }
    }

    async fn handle_text_turn(
        &self,
        history: &[ConversationTurn],
        user_text: &str,
        media: Option<MediaAttachment>,
    ) -> TurnOutcome {
        if media.is_none() {
            if let Some(text) = self.literal_lookup(user_text) {
                log::debug!("literal scripture reference answered from the corpus");
                return TurnOutcome::text_only(ProviderResult::ok(text));
            }
        }

        if self.chain.is_empty() {
            return TurnOutcome::text_only(ProviderResult::failed(
                replies::NOT_CONFIGURED,
                ErrorKind::Unknown,
            ));
        }

        let verse = find_best_verse(self.corpus.records(), user_text);
        if let Some(verse) = verse {
            log::debug!("grounding response in verse {}", verse.chapter_verse_id);
        }

        let request = self.assembler.assemble(history, user_text, media, verse);
        let needs_media = request.has_media();

        let mut last_kind = ErrorKind::Unknown;
        for provider in &self.chain {
            if needs_media && !provider.supports_media() {
                log::debug!("{} cannot accept media; skipping", provider.name());
                last_kind = ErrorKind::UnsupportedInput;
                continue;
            }
            match provider.complete(&request).await {
                Ok(text) => {
                    log::info!("turn answered by {}", provider.name());
                    return TurnOutcome::text_only(ProviderResult::ok(text));
                }
                Err(err) => {
                    log::warn!("{} failed: {err}", provider.name());
                    last_kind = err.kind();
                }
            }
        }

        TurnOutcome::text_only(ProviderResult::failed(
            replies::failure_message(last_kind),
            last_kind,
        ))
    }
}
