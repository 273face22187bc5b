//! Canon Data Types
//!
//! Domain types for the book registry and per-translation canon extents, plus the
//! fatal configuration errors checked once at load time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single entry in the static book registry.
///
/// Books are identified by a stable three-character USFX-style key (`GEN`, `JHN`) and
/// ordered by `ordinal`, the natural reading order of scripture. The `aliases` list
/// holds accepted abbreviations; resolution also accepts the key and the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    pub key: &'static str,
    pub ordinal: u16,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

/// Verse counts for one book within one translation's canon.
///
/// `chapters[c - 1]` is the number of verses in chapter `c`. Derived from the loaded
/// corpus, never hand-maintained, so translation-specific numbering differences
/// (Psalm titles, bridged verses, omitted books) fall out of the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookExtent {
    pub book: &'static Book,
    pub chapters: Vec<u32>,
}

impl BookExtent {
    pub fn chapter_count(&self) -> u32 {
        self.chapters.len() as u32
    }

    /// Verse count of `chapter` (1-based), or `None` when the chapter is out of range.
    pub fn verse_count(&self, chapter: u32) -> Option<u32> {
        if chapter == 0 {
            return None;
        }
        self.chapters.get(chapter as usize - 1).copied()
    }
}

/// A loaded Bible translation and the canon it supports.
///
/// Immutable after load. `id` is the short public code clients use (`KJV`, `VDCC`);
/// `public_id` is a UUID minted when the corpus is loaded.
#[derive(Debug, Clone)]
pub struct Translation {
    pub public_id: String,
    pub id: String,
    pub full_name: String,
    pub language_code: String,
    /// Books present in this translation, in canonical order.
    pub books: Vec<BookExtent>,
}

impl Translation {
    pub fn extent_of(&self, book: &Book) -> Option<&BookExtent> {
        self.books.iter().find(|e| e.book.key == book.key)
    }
}

/// Translation identification returned by the metadata endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationInfo {
    pub public_id: String,
    pub id: String,
    pub full_name: String,
    pub language_code: String,
}

impl From<&Translation> for TranslationInfo {
    fn from(t: &Translation) -> Self {
        Self {
            public_id: t.public_id.clone(),
            id: t.id.clone(),
            full_name: t.full_name.clone(),
            language_code: t.language_code.clone(),
        }
    }
}

/// Fatal load-time configuration errors.
///
/// The engine must never serve with an inconsistent canon, so every variant here
/// aborts startup instead of degrading into runtime behaviour.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("book name '{name}' resolves to both {first} and {second}")]
    AmbiguousBookName {
        name: String,
        first: &'static str,
        second: &'static str,
    },
    #[error("duplicate book key '{key}' in registry")]
    DuplicateBookKey { key: &'static str },
    #[error("translation '{id}' loaded twice")]
    DuplicateTranslation { id: String },
    #[error("verse recorded for unregistered translation '{id}'")]
    UnregisteredTranslation { id: String },
    #[error("translation '{translation}' contains unknown book '{book}'")]
    UnknownBook { translation: String, book: String },
    #[error("translation '{translation}' contains no verses")]
    EmptyTranslation { translation: String },
}
