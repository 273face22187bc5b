//! Reference Parsing
//!
//! Longest-prefix book matching against the canon name table, then chapter/verse
//! parsing with bounds validation deferred to the Canon Model.

use std::sync::Arc;

use crate::canon::model::CanonModel;
use crate::canon::types::{Book, BookExtent};

use super::types::{ParseError, Reference};

/// Most words a book name can span ("Song of Solomon" plus slack).
const MAX_BOOK_NAME_WORDS: usize = 4;

pub struct ReferenceParser {
    canon: Arc<CanonModel>,
}

impl ReferenceParser {
    pub fn new(canon: Arc<CanonModel>) -> Self {
        Self { canon }
    }

    /// Parse a free-text reference into canonical coordinates.
    ///
    /// With a translation, bounds come from that translation's canon and books
    /// outside it are rejected with `NotInCanon`. Without one, bounds come from the
    /// widest canon known and per-translation existence is left to the verse store.
    pub fn parse(
        &self,
        text: &str,
        translation: Option<&str>,
    ) -> Result<Vec<Reference>, ParseError> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return Err(ParseError::UnrecognizedBook {
                input: text.to_string(),
            });
        }

        let (book, consumed) = self.match_book_prefix(&words).ok_or_else(|| {
            ParseError::UnrecognizedBook {
                input: text.to_string(),
            }
        })?;

        let extent = match self.canon.extent(translation, book) {
            Some(extent) => extent,
            // A named translation rejects books outside its canon. Without one,
            // a registry name no loaded translation carries is plain free text
            // ("Job opening hours"), not a broken reference.
            None => {
                return Err(match translation {
                    Some(id) => ParseError::NotInCanon {
                        book: book.name.to_string(),
                        translation: Some(id.to_uppercase()),
                    },
                    None => ParseError::UnrecognizedBook {
                        input: text.to_string(),
                    },
                });
            }
        };

        let rest = words[consumed..].join(" ");
        let mut references = if rest.is_empty() {
            whole_book(book, extent)
        } else {
            let mut refs = Vec::new();
            for segment in rest.split(',') {
                refs.push(parse_segment(segment, book, extent)?);
            }
            refs
        };

        if let Some(id) = translation {
            references = references.into_iter().map(|r| r.bind(id)).collect();
        }
        Ok(references)
    }

    /// Greedily consume the longest word prefix that resolves to a book.
    fn match_book_prefix(&self, words: &[&str]) -> Option<(&'static Book, usize)> {
        let upper = words.len().min(MAX_BOOK_NAME_WORDS);
        for n in (1..=upper).rev() {
            let candidate = words[..n].join(" ");
            if let Some(book) = self.canon.resolve_book_name(&candidate) {
                return Some((book, n));
            }
        }
        None
    }
}

/// Book-only input: one whole-chapter reference per chapter, in reading order.
fn whole_book(book: &'static Book, extent: &BookExtent) -> Vec<Reference> {
    (1..=extent.chapter_count())
        .map(|chapter| {
            let verses = extent.verse_count(chapter).unwrap_or(1).max(1);
            Reference::range(book, chapter, 1, verses)
        })
        .collect()
}

/// One comma-separated segment: `<chapter>[:<verse>[-<verse>]]`.
fn parse_segment(
    segment: &str,
    book: &'static Book,
    extent: &BookExtent,
) -> Result<Reference, ParseError> {
    let segment = segment.trim();
    if segment.is_empty() {
        return Err(ParseError::Malformed {
            detail: segment.to_string(),
        });
    }

    let (chapter_part, verse_part) = match segment.split_once(':') {
        Some((c, v)) => (c.trim(), Some(v.trim())),
        None => (segment, None),
    };

    // "Gen 1-3" and "3:16-4:2" both span chapters.
    if chapter_part.contains('-') {
        return Err(ParseError::Unsupported);
    }
    if let Some(v) = verse_part {
        if v.contains(':') {
            return Err(ParseError::Unsupported);
        }
    }

    let chapter = parse_number(chapter_part).ok_or_else(|| ParseError::Malformed {
        detail: segment.to_string(),
    })?;
    let max_chapter = extent.chapter_count();
    if chapter > max_chapter {
        return Err(ParseError::ChapterOutOfRange {
            book: book.name.to_string(),
            chapter,
            max: max_chapter,
        });
    }
    let max_verse = extent.verse_count(chapter).unwrap_or(0);

    let Some(verse_part) = verse_part else {
        return Ok(Reference::range(book, chapter, 1, max_verse.max(1)));
    };

    let (start_part, end_part) = match verse_part.split_once('-') {
        Some((s, e)) => (s.trim(), Some(e.trim())),
        None => (verse_part, None),
    };

    let start = parse_number(start_part).ok_or_else(|| ParseError::Malformed {
        detail: segment.to_string(),
    })?;
    let end = match end_part {
        Some(e) => parse_number(e).ok_or_else(|| ParseError::Malformed {
            detail: segment.to_string(),
        })?,
        None => start,
    };

    if end < start {
        return Err(ParseError::Malformed {
            detail: segment.to_string(),
        });
    }
    for verse in [start, end] {
        if verse > max_verse {
            return Err(ParseError::VerseOutOfRange {
                book: book.name.to_string(),
                chapter,
                verse,
                max: max_verse,
            });
        }
    }

    Ok(Reference::range(book, chapter, start, end))
}

/// A 1-based number token, tolerating trailing punctuation ("16.").
fn parse_number(token: &str) -> Option<u32> {
    let digits = token.trim().trim_matches(|c: char| !c.is_ascii_digit());
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}
