//! Literal chapter/verse lookup.
//!
//! These paths are checked by the caller before the scored retriever runs:
//! a query that is exactly a verse number (`"2.47"`) or a chapter reference
//! (`"chapter 2"`, `"ch 2"`, bare `"2"`) is answered directly from the
//! corpus, formatted for display.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::corpus::VerseRecord;

static CHAPTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:chapter|ch)?\s*(\d+)$").expect("chapter pattern"));
static VERSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+$").expect("verse pattern"));

/// Whether the query is shaped like an exact verse reference, found in the
/// corpus or not.
pub fn is_verse_reference(query: &str) -> bool {
    VERSE_RE.is_match(query.trim())
}

/// Exact-id verse lookup for queries like `"2.47"`.
pub fn verse_literal<'a>(records: &'a [VerseRecord], query: &str) -> Option<&'a VerseRecord> {
    let trimmed = query.trim();
    if !VERSE_RE.is_match(trimmed) {
        return None;
    }
    records.iter().find(|v| v.chapter_verse_id == trimmed)
}

/// All verses of a chapter for queries like `"chapter 2"`. Returns `None`
/// when the query is not a chapter reference; an empty vector means the
/// chapter reference was recognized but no verse carries that chapter.
pub fn chapter<'a>(records: &'a [VerseRecord], query: &str) -> Option<Vec<&'a VerseRecord>> {
    let caps = CHAPTER_RE.captures(query.trim())?;
    let prefix = format!("{}.", &caps[1]);
    Some(
        records
            .iter()
            .filter(|v| v.chapter_verse_id.starts_with(&prefix))
            .collect(),
    )
}

/// Display formatting for a single verse: id, devanagari, translation,
/// purport, skipping empty fields.
pub fn format_verse(verse: &VerseRecord) -> String {
    let mut out = format!("Verse {}", verse.chapter_verse_id);
    for field in [&verse.devanagari, &verse.translation, &verse.purport] {
        if !field.is_empty() {
            out.push('\n');
            out.push_str(field);
        }
    }
    out
}
