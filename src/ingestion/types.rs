//! Ingestion Data Types
//!
//! Serde DTOs matching the JSON the extraction tooling emits: one file per
//! translation, carrying its metadata and a flat list of verse records.

use serde::{Deserialize, Serialize};

/// One extracted translation file.
///
/// Extractor output sometimes labels the short code `translation` instead of
/// `abbreviation`; both are accepted. Unknown fields (verse_count, format) are
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationFile {
    #[serde(alias = "translation")]
    pub abbreviation: String,
    pub full_name: String,
    pub language_code: String,
    #[serde(default)]
    pub source_url: Option<String>,
    pub verses: Vec<VerseRecord>,
}

/// One verse as extracted: book identified by its long lowercase name
/// ("genesis", "1samuel", "song-of-solomon"), 1-based chapter and verse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseRecord {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}
