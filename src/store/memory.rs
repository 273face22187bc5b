//! In-Memory Verse Store
//!
//! `DashMap`-backed store keyed by exact canonical coordinates. The binary populates
//! it once at load time; afterwards it only serves reads, so no coordination beyond
//! the map's own sharding is needed.

use dashmap::DashMap;

use async_trait::async_trait;

use crate::reference::types::Reference;

use super::types::{StoreError, Verse};
use super::VerseStore;

/// (translation, book ordinal, chapter, verse)
type Coordinate = (String, u16, u32, u32);

#[derive(Default)]
pub struct MemoryVerseStore {
    verses: DashMap<Coordinate, Verse>,
}

impl MemoryVerseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, verse: Verse) {
        let key = (
            verse.translation.to_uppercase(),
            verse.reference.book_ordinal,
            verse.reference.chapter,
            verse.reference.verse_start,
        );
        self.verses.insert(key, verse);
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

#[async_trait]
impl VerseStore for MemoryVerseStore {
    async fn fetch_verses(
        &self,
        translation: &str,
        references: &[Reference],
    ) -> Result<Vec<Verse>, StoreError> {
        let translation = translation.to_uppercase();
        let mut out = Vec::new();

        for reference in references {
            let mut found_any = false;
            for verse in reference.verse_start..=reference.verse_end {
                let key = (
                    translation.clone(),
                    reference.book_ordinal,
                    reference.chapter,
                    verse,
                );
                if let Some(entry) = self.verses.get(&key) {
                    out.push(entry.value().clone());
                    found_any = true;
                }
            }
            if !found_any {
                return Err(StoreError::NotFound {
                    translation,
                    reference: reference.clone(),
                });
            }
        }

        tracing::debug!(
            translation = %translation,
            references = references.len(),
            verses = out.len(),
            "fetched verses"
        );
        Ok(out)
    }
}
