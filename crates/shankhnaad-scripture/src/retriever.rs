//! Scored verse retrieval.
//!
//! A cheap, explainable linear scan: tokenize the query, count how many
//! tokens each record's combined text contains as substrings, keep the first
//! record with the strictly highest count. No stemming, no index, no model.

use crate::corpus::VerseRecord;

/// Find the single best-matching verse for a free-text query.
///
/// Tokens of two characters or fewer are discarded. Matching is pure substring
/// containment over the lowercased concatenation of translation, purport and
/// devanagari text, so partial-word matches count. Ties keep the record seen
/// first in corpus order. Returns `None` when no token matches anything.
pub fn find_best_verse<'a>(records: &'a [VerseRecord], query: &str) -> Option<&'a VerseRecord> {
    let query = query.to_lowercase();
    // Character count, not byte length; a short Devanagari token is still
    // a short token.
    let tokens: Vec<&str> = query
        .split_whitespace()
        .filter(|t| t.chars().count() > 2)
        .collect();

    if tokens.is_empty() || records.is_empty() {
        return None;
    }

    let mut best: Option<(&VerseRecord, usize)> = None;
    for record in records {
        let haystack = format!(
            "{} {} {}",
            record.translation, record.purport, record.devanagari
        )
        .to_lowercase();

        let score = tokens.iter().filter(|t| haystack.contains(**t)).count();
        if score > best.map(|(_, s)| s).unwrap_or(0) {
            best = Some((record, score));
        }
    }

    if let Some((record, score)) = best {
        log::debug!(
            "retrieval: verse {} scored {}/{} for query",
            record.chapter_verse_id,
            score,
            tokens.len()
        );
    }
    best.map(|(record, _)| record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, translation: &str, purport: &str) -> VerseRecord {
        VerseRecord {
            chapter_verse_id: id.to_string(),
            devanagari: String::new(),
            translation: translation.to_string(),
            purport: purport.to_string(),
        }
    }

    #[test]
    fn short_tokens_yield_none() {
        let records = vec![record("1.1", "to be or not to be", "")];
        assert!(find_best_verse(&records, "to be or it is").is_none());
        assert!(find_best_verse(&records, "").is_none());
        assert!(find_best_verse(&records, "  ab  cd ").is_none());
    }

    #[test]
    fn token_length_counts_characters_not_bytes() {
        let mut verse = record("9.22", "", "");
        verse.devanagari = "ॐ तत् सत्".to_string();
        let records = vec![verse];
        // One- and two-character Devanagari tokens are discarded even though
        // they are several bytes long.
        assert!(find_best_verse(&records, "ॐ").is_none());
        // A three-character token survives the filter and matches.
        assert!(find_best_verse(&records, "तत्").is_some());
    }

    #[test]
    fn empty_corpus_yields_none() {
        assert!(find_best_verse(&[], "surrender unto me").is_none());
    }

    #[test]
    fn zero_score_yields_none() {
        let records = vec![record("1.1", "duty and action", "")];
        assert!(find_best_verse(&records, "spaceship telemetry").is_none());
    }

    #[test]
    fn picks_record_containing_every_token() {
        let records = vec![
            record("1.1", "the field of battle", ""),
            record("2.47", "your right is to duty alone", "never to its fruits"),
        ];
        let best = find_best_verse(&records, "duty fruits").unwrap();
        assert_eq!(best.chapter_verse_id, "2.47");
    }

    #[test]
    fn substring_matches_count() {
        // "fruit" matches inside "fruits"; not word-boundary aware.
        let records = vec![record("2.47", "never attached to the fruits", "")];
        assert!(find_best_verse(&records, "fruit").is_some());
    }

    #[test]
    fn first_seen_wins_ties() {
        let records = vec![
            record("1.1", "surrender and devotion", ""),
            record("18.66", "surrender and devotion", ""),
        ];
        let best = find_best_verse(&records, "surrender devotion").unwrap();
        assert_eq!(best.chapter_verse_id, "1.1");
    }

    #[test]
    fn strictly_higher_score_replaces_incumbent() {
        let records = vec![
            record("1.1", "surrender", ""),
            record("18.66", "surrender and devotion", ""),
        ];
        let best = find_best_verse(&records, "surrender devotion").unwrap();
        assert_eq!(best.chapter_verse_id, "18.66");
    }

    #[test]
    fn purport_and_devanagari_are_searched() {
        let mut only_purport = record("9.22", "", "yoga-ksema is carried by the lord");
        only_purport.devanagari = "योगक्षेमं".to_string();
        let records = vec![only_purport];
        assert!(find_best_verse(&records, "carried").is_some());
        assert!(find_best_verse(&records, "योगक्षेमं").is_some());
    }
}
