//! Canon Model Construction and Lookup
//!
//! `CanonModel` is built exactly once at startup from the loaded corpus and then
//! shared read-only. Construction validates the configuration invariants (ambiguous
//! names, duplicate keys, unknown books) and derives each translation's extents from
//! the verses actually recorded, the same way the upstream service derived chapter
//! and verse counts from its verse table.

use std::collections::HashMap;

use uuid::Uuid;

use super::books::{self, BOOKS};
use super::types::{Book, BookExtent, ConfigError, Translation};

/// Normalize a book name for resolution: lowercase, alphanumerics only.
///
/// `"1 Sam."`, `"1sam"` and `"1 SAM"` all normalize to `"1sam"`.
pub fn normalize_name(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Immutable book/translation metadata, shared by parser, index, and handlers.
#[derive(Debug)]
pub struct CanonModel {
    /// Normalized resolvable name -> book ordinal. Unique by construction.
    name_table: HashMap<String, u16>,
    /// Loaded translations in load order.
    translations: Vec<Translation>,
    /// Uppercased translation id -> index into `translations`.
    by_id: HashMap<String, usize>,
    /// Widest canon known: per-book maxima across all loaded translations.
    union: HashMap<u16, BookExtent>,
}

impl CanonModel {
    pub fn builder() -> CanonModelBuilder {
        CanonModelBuilder::default()
    }

    /// Resolve a human book name, key, or abbreviation to its registry entry.
    pub fn resolve_book_name(&self, input: &str) -> Option<&'static Book> {
        let normalized = normalize_name(input);
        if normalized.is_empty() {
            return None;
        }
        self.name_table
            .get(&normalized)
            .and_then(|ordinal| books::by_ordinal(*ordinal))
    }

    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }

    pub fn translation(&self, id: &str) -> Option<&Translation> {
        self.by_id
            .get(&id.to_uppercase())
            .map(|i| &self.translations[*i])
    }

    /// Books of a translation in canonical order, or `None` for an unknown id.
    pub fn books_of(&self, translation_id: &str) -> Option<&[BookExtent]> {
        self.translation(translation_id).map(|t| t.books.as_slice())
    }

    /// Extent of `book` within the given scope.
    ///
    /// A `None` translation means the widest canon known (union of all loaded
    /// translations). Returns `None` when the book is absent from the scope.
    pub fn extent(&self, translation: Option<&str>, book: &Book) -> Option<&BookExtent> {
        match translation {
            Some(id) => self.translation(id).and_then(|t| t.extent_of(book)),
            None => self.union.get(&book.ordinal),
        }
    }
}

#[derive(Debug, Default)]
struct PendingTranslation {
    id: String,
    full_name: String,
    language_code: String,
    /// Book ordinal -> per-chapter maximum verse number seen so far.
    extents: HashMap<u16, Vec<u32>>,
}

/// Accumulates verse coordinates per translation, then validates and freezes the model.
#[derive(Debug, Default)]
pub struct CanonModelBuilder {
    pending: Vec<PendingTranslation>,
}

impl CanonModelBuilder {
    /// Register a translation. Ids compare case-insensitively.
    pub fn add_translation(
        &mut self,
        id: &str,
        full_name: &str,
        language_code: &str,
    ) -> Result<(), ConfigError> {
        let id = id.to_uppercase();
        if self.pending.iter().any(|p| p.id == id) {
            return Err(ConfigError::DuplicateTranslation { id });
        }
        self.pending.push(PendingTranslation {
            id,
            full_name: full_name.to_string(),
            language_code: language_code.to_string(),
            extents: HashMap::new(),
        });
        Ok(())
    }

    /// Record one verse coordinate for a translation's canon.
    pub fn record_verse(
        &mut self,
        translation_id: &str,
        book_name: &str,
        chapter: u32,
        verse: u32,
    ) -> Result<&'static Book, ConfigError> {
        let translation_id = translation_id.to_uppercase();
        let book = resolve_static(book_name).ok_or_else(|| ConfigError::UnknownBook {
            translation: translation_id.clone(),
            book: book_name.to_string(),
        })?;
        let pending = self
            .pending
            .iter_mut()
            .find(|p| p.id == translation_id)
            .ok_or(ConfigError::UnregisteredTranslation {
                id: translation_id,
            })?;

        let chapters = pending.extents.entry(book.ordinal).or_default();
        if chapters.len() < chapter as usize {
            chapters.resize(chapter as usize, 0);
        }
        if chapter > 0 {
            let slot = &mut chapters[chapter as usize - 1];
            *slot = (*slot).max(verse);
        }
        Ok(book)
    }

    /// Validate the registry and freeze the model. Any error here is fatal.
    pub fn build(self) -> Result<CanonModel, ConfigError> {
        let name_table = build_name_table()?;

        let mut translations = Vec::with_capacity(self.pending.len());
        let mut by_id = HashMap::new();
        let mut union: HashMap<u16, BookExtent> = HashMap::new();

        for pending in self.pending {
            if pending.extents.is_empty() {
                return Err(ConfigError::EmptyTranslation {
                    translation: pending.id,
                });
            }

            let mut books: Vec<BookExtent> = pending
                .extents
                .into_iter()
                .filter_map(|(ordinal, chapters)| {
                    books::by_ordinal(ordinal).map(|book| BookExtent { book, chapters })
                })
                .collect();
            books.sort_by_key(|e| e.book.ordinal);

            for extent in &books {
                let merged = union
                    .entry(extent.book.ordinal)
                    .or_insert_with(|| BookExtent {
                        book: extent.book,
                        chapters: Vec::new(),
                    });
                if merged.chapters.len() < extent.chapters.len() {
                    merged.chapters.resize(extent.chapters.len(), 0);
                }
                for (i, count) in extent.chapters.iter().enumerate() {
                    merged.chapters[i] = merged.chapters[i].max(*count);
                }
            }

            by_id.insert(pending.id.clone(), translations.len());
            translations.push(Translation {
                public_id: Uuid::new_v4().to_string(),
                id: pending.id,
                full_name: pending.full_name,
                language_code: pending.language_code,
                books,
            });
        }

        tracing::info!(
            translations = translations.len(),
            resolvable_names = name_table.len(),
            "canon model built"
        );

        Ok(CanonModel {
            name_table,
            translations,
            by_id,
            union,
        })
    }
}

/// Resolution against the registry alone, before the model exists.
fn resolve_static(input: &str) -> Option<&'static Book> {
    let normalized = normalize_name(input);
    BOOKS.iter().find(|b| {
        normalize_name(b.key) == normalized
            || normalize_name(b.name) == normalized
            || b.aliases.iter().any(|a| normalize_name(a) == normalized)
    })
}

/// Build the normalized name table, enforcing the uniqueness invariant.
///
/// Names are inserted in priority order (key, display name, each alias); a collision
/// between two different books is a fatal `ConfigError`, a repeat within one book is
/// harmless and skipped.
fn build_name_table() -> Result<HashMap<String, u16>, ConfigError> {
    let mut keys_seen: HashMap<&'static str, ()> = HashMap::new();
    for book in BOOKS {
        if keys_seen.insert(book.key, ()).is_some() {
            return Err(ConfigError::DuplicateBookKey { key: book.key });
        }
    }

    let mut table: HashMap<String, u16> = HashMap::new();
    for book in BOOKS {
        let mut candidates: Vec<&str> = vec![book.key, book.name];
        candidates.extend(book.aliases.iter().copied());

        for candidate in candidates {
            let normalized = normalize_name(candidate);
            if normalized.is_empty() {
                continue;
            }
            match table.get(&normalized) {
                Some(owner) if *owner != book.ordinal => {
                    let first = books::by_ordinal(*owner).map(|b| b.key).unwrap_or("?");
                    return Err(ConfigError::AmbiguousBookName {
                        name: normalized,
                        first,
                        second: book.key,
                    });
                }
                Some(_) => {}
                None => {
                    table.insert(normalized, book.ordinal);
                }
            }
        }
    }
    Ok(table)
}
