//! Corpus loading.
//!
//! The bundled dataset ships in the upstream export shape: records keyed
//! `VERSE` / `DEVANAGRI` / `TRANSLATION` / `PURPORT`, either as a flat array
//! or wrapped in a `{"verses": [...]}` object. Both are accepted; anything
//! else degrades to an empty corpus rather than an error, so retrieval simply
//! finds nothing.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// One scripture verse. Any text field may be empty.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VerseRecord {
    /// `"<chapter>.<verse>"`, e.g. `"2.47"`.
    #[serde(rename = "VERSE", alias = "verse", default)]
    pub chapter_verse_id: String,
    #[serde(rename = "DEVANAGRI", alias = "devanagari", default)]
    pub devanagari: String,
    #[serde(rename = "TRANSLATION", alias = "translation", default)]
    pub translation: String,
    #[serde(rename = "PURPORT", alias = "purport", default)]
    pub purport: String,
}

#[derive(Debug, Deserialize)]
struct Wrapper {
    verses: Vec<VerseRecord>,
}

/// Parse the raw dataset. Accepts a flat array of verse objects or a wrapper
/// object with a `verses` field; any other shape yields an empty vector.
pub fn load_records(raw: &str) -> Vec<VerseRecord> {
    let records = if let Ok(flat) = serde_json::from_str::<Vec<VerseRecord>>(raw) {
        flat
    } else if let Ok(wrapper) = serde_json::from_str::<Wrapper>(raw) {
        wrapper.verses
    } else {
        log::warn!("scripture dataset did not match any known shape; corpus is empty");
        Vec::new()
    };

    let records: Vec<VerseRecord> = records
        .into_iter()
        .map(|mut v| {
            v.chapter_verse_id = v.chapter_verse_id.trim().to_string();
            v.devanagari = v.devanagari.trim().to_string();
            v.translation = v.translation.trim().to_string();
            v.purport = v.purport.trim().to_string();
            v
        })
        .collect();

    log::info!("loaded {} scripture records", records.len());
    records
}

static BUNDLED: Lazy<Vec<VerseRecord>> =
    Lazy::new(|| load_records(include_str!("../data/gita.json")));

/// The process-wide, read-only verse collection.
#[derive(Debug, Clone, Copy)]
pub struct Corpus {
    records: &'static [VerseRecord],
}

impl Corpus {
    /// The bundled dataset, parsed on first use and shared thereafter.
    pub fn bundled() -> Self {
        Self { records: &BUNDLED }
    }

    pub fn records(&self) -> &[VerseRecord] {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
