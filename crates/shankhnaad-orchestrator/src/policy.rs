//! Content policy filter for the image-generation path.
//!
//! Binary keyword gate: when it fires, the orchestrator refuses generation
//! outright and no provider call is made. Matching is lowercase substring
//! containment against a fixed denylist.

const DENYLIST: &[&str] = &[
    "nude",
    "nudity",
    "naked",
    "nsfw",
    "porn",
    "erotic",
    "sexual",
    "explicit",
    "xxx",
    "gore",
    "bloody",
    "brutal",
    "violence",
    "violent",
    "kill",
    "murder",
    "beheading",
    "corpse",
    "torture",
    "weapon",
];

/// Whether the text asks for disallowed explicit or violent imagery.
pub fn contains_explicit_content(text: &str) -> bool {
    let lowered = text.to_lowercase();
    DENYLIST.iter().any(|term| lowered.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benign_text_passes() {
        assert!(!contains_explicit_content("nothing concerning"));
        assert!(!contains_explicit_content("a lotus flower at sunrise"));
        assert!(!contains_explicit_content(""));
    }

    #[test]
    fn explicit_terms_are_caught_case_insensitively() {
        assert!(contains_explicit_content("generate NUDE art"));
        assert!(contains_explicit_content("a VIOLENT battle scene"));
        assert!(contains_explicit_content("Gore everywhere"));
    }

    #[test]
    fn matching_is_substring_based() {
        // "kill" inside "killing" still fires; the filter is deliberately blunt.
        assert!(contains_explicit_content("killing fields"));
    }
}
