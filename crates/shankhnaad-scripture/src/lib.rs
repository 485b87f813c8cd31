//! Bhagavad-gita corpus with scored retrieval and literal lookup.
//!
//! The corpus is a small, flat, in-memory record set loaded once at startup.
//! Retrieval is a synchronous linear scan; there is no index and no network
//! involvement, so lookups are safe to run inline with request handling.

pub mod corpus;
pub mod lookup;
pub mod retriever;

pub use corpus::{load_records, Corpus, VerseRecord};
pub use lookup::{chapter, format_verse, is_verse_reference, verse_literal};
pub use retriever::find_best_verse;
