//! Reference Types
//!
//! The resolved coordinate value type and the parse error taxonomy. A `Reference`
//! is created by the parser, consumed by the verse store and query engine, and never
//! mutated after creation.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::canon::books;
use crate::canon::types::Book;

/// A resolved scripture coordinate: one verse range within one chapter.
///
/// `verse_end` is inclusive and equals `verse_start` for a single verse. The
/// translation binding is optional; a canon-agnostic reference is bound later by
/// whoever fetches text for it. Ordering is canonical — (book ordinal, chapter,
/// verse) — and ignores the translation binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub translation: Option<String>,
    pub book: String,
    pub book_ordinal: u16,
    pub chapter: u32,
    pub verse_start: u32,
    pub verse_end: u32,
}

impl Reference {
    pub fn verse(book: &Book, chapter: u32, verse: u32) -> Self {
        Self::range(book, chapter, verse, verse)
    }

    pub fn range(book: &Book, chapter: u32, verse_start: u32, verse_end: u32) -> Self {
        Self {
            translation: None,
            book: book.key.to_string(),
            book_ordinal: book.ordinal,
            chapter,
            verse_start,
            verse_end,
        }
    }

    pub fn bind(mut self, translation: &str) -> Self {
        self.translation = Some(translation.to_uppercase());
        self
    }

    pub fn is_single_verse(&self) -> bool {
        self.verse_start == self.verse_end
    }

    /// Canonical ordering key: the natural reading order of scripture.
    pub fn canonical_key(&self) -> (u16, u32, u32, u32) {
        (
            self.book_ordinal,
            self.chapter,
            self.verse_start,
            self.verse_end,
        )
    }
}

impl PartialOrd for Reference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Reference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_key().cmp(&other.canonical_key())
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = books::by_ordinal(self.book_ordinal)
            .map(|b| b.name)
            .unwrap_or(self.book.as_str());
        if self.is_single_verse() {
            write!(f, "{} {}:{}", name, self.chapter, self.verse_start)
        } else {
            write!(
                f,
                "{} {}:{}-{}",
                name, self.chapter, self.verse_start, self.verse_end
            )
        }
    }
}

/// Why a reference string failed to parse.
///
/// The first three variants mean the input plainly wasn't a reference (or used an
/// unsupported form) and the caller may fall back to free-text search. The
/// out-of-range and canon variants mean the user clearly intended a reference and
/// carry the violated bound so the caller can render a precise correction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no recognizable book name in '{input}'")]
    UnrecognizedBook { input: String },
    #[error("could not read '{detail}' as a chapter or verse")]
    Malformed { detail: String },
    #[error("cross-chapter verse ranges are not supported")]
    Unsupported,
    #[error("chapter {chapter} not in {book} (max {max})")]
    ChapterOutOfRange { book: String, chapter: u32, max: u32 },
    #[error("verse {verse} not in {book} {chapter} (max {max})")]
    VerseOutOfRange {
        book: String,
        chapter: u32,
        verse: u32,
        max: u32,
    },
    #[error("{book} is not in the canon of {}", .translation.as_deref().unwrap_or("any loaded translation"))]
    NotInCanon {
        book: String,
        translation: Option<String>,
    },
}

impl ParseError {
    /// True when the input should be treated as free text rather than a broken
    /// reference: nothing resolvable as a book, a non-numeric tail after a book
    /// name that doubles as an ordinary word ("Job", "Acts"), or an unsupported
    /// range form.
    pub fn is_non_reference(&self) -> bool {
        matches!(
            self,
            ParseError::UnrecognizedBook { .. }
                | ParseError::Malformed { .. }
                | ParseError::Unsupported
        )
    }
}
