//! Image-versus-text intent classification.
//!
//! The pattern list lives behind a trait so it can be swapped for a learned
//! classifier without touching the router.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// An explicit request to generate an image.
    Image,
    /// Ordinary conversational text.
    Text,
    /// Visual phrasing without a clear generation request; the router treats
    /// this as text but callers may choose to speculate.
    Ambiguous,
}

pub trait IntentClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Intent;
}

static IMAGE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Imperative verb + image noun: "draw an image of ...", "paint me a picture ..."
        r"(?i)\b(generate|create|draw|make|show|paint)\s+(me\s+)?(an?\s+|some\s+)?(image|picture|photo|painting|drawing|artwork?|illustration)\b",
        // Leading noun form: "picture of a temple"
        r"(?i)^(an?\s+)?(picture|photo|image)\s+of\b",
        // First-person request: "i want an image of ..."
        r"(?i)\bi\s+(want|need|would\s+like)\s+(an?\s+)?(image|picture|photo|painting|drawing)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("intent pattern"))
    .collect()
});

static VISUAL_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(image|picture|photo|visual|drawing|painting|artwork?)\b")
        .expect("visual word pattern")
});

/// Messages shorter than this with visual wording are treated as ambiguous.
/// The router resolves `Ambiguous` down the text path (with retrieval); no
/// speculative image call is made on these turns.
const AMBIGUOUS_MAX_LEN: usize = 60;

/// The fixed regex-based classifier.
#[derive(Debug, Default)]
pub struct PatternClassifier;

impl IntentClassifier for PatternClassifier {
    fn classify(&self, text: &str) -> Intent {
        let trimmed = text.trim();
        if IMAGE_PATTERNS.iter().any(|re| re.is_match(trimmed)) {
            return Intent::Image;
        }
        if trimmed.len() < AMBIGUOUS_MAX_LEN && VISUAL_WORDS.is_match(trimmed) {
            return Intent::Ambiguous;
        }
        Intent::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Intent {
        PatternClassifier.classify(text)
    }

    #[test]
    fn imperative_requests_are_image_intent() {
        for text in [
            "generate an image of Krishna playing the flute",
            "draw a picture of a lotus",
            "Create some artwork of Vrindavan",
            "paint me a painting of the battlefield of Kurukshetra",
            "make an illustration of a peacock",
            "show me a photo of a temple",
        ] {
            assert_eq!(classify(text), Intent::Image, "{text:?}");
        }
    }

    #[test]
    fn leading_noun_and_first_person_forms_are_image_intent() {
        assert_eq!(classify("picture of a sunrise over the Ganges"), Intent::Image);
        assert_eq!(classify("I want an image of Radha and Krishna"), Intent::Image);
    }

    #[test]
    fn plain_questions_are_text_intent() {
        for text in [
            "what is dharma?",
            "explain verse 2.47",
            "how do I control my mind during meditation practice sessions?",
        ] {
            assert_eq!(classify(text), Intent::Text, "{text:?}");
        }
    }

    #[test]
    fn short_visual_phrasing_is_ambiguous() {
        assert_eq!(classify("the picture in chapter two"), Intent::Ambiguous);
        assert_eq!(classify("that painting was lovely"), Intent::Ambiguous);
    }

    #[test]
    fn long_visual_mentions_stay_text() {
        let long = "In the painting described by the Bhagavatam, the gopis surround \
                    Krishna while the moon rises over the Yamuna river bank";
        assert_eq!(classify(long), Intent::Text);
    }
}
