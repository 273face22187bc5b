//! Inverted Index
//!
//! Snapshot construction and the ranked query path. A build tokenizes every verse
//! into a document table plus postings, wholesale; there is no partial update. The
//! live snapshot sits behind a single handle that readers clone and rebuilds swap,
//! so an in-flight query always scores against one consistent snapshot end to end.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::store::types::Verse;

use super::tokenizer::{tokenize_query, tokenize_text};
use super::types::{IndexError, SearchResult};

/// One verse as a scoring unit.
#[derive(Debug, Clone)]
struct DocEntry {
    translation: String,
    reference: crate::reference::types::Reference,
    text: String,
}

/// One inverted-index entry: where a term occurs within one document.
#[derive(Debug, Clone)]
struct Posting {
    doc: u32,
    tf: u32,
    positions: Vec<u32>,
}

/// A fully built, immutable index over one corpus generation.
pub struct IndexSnapshot {
    docs: Vec<DocEntry>,
    postings: HashMap<String, Vec<Posting>>,
    doc_counts: HashMap<String, u32>,
}

impl IndexSnapshot {
    /// Full offline build. Documents are laid out in canonical order (book ordinal,
    /// chapter, verse, then translation id) so ascending doc ids are the
    /// deterministic tie-break order.
    pub fn build(verses: &[Verse]) -> Self {
        let mut docs: Vec<DocEntry> = verses
            .iter()
            .map(|v| DocEntry {
                translation: v.translation.to_uppercase(),
                reference: v.reference.clone(),
                text: v.text.clone(),
            })
            .collect();
        docs.sort_by(|a, b| {
            a.reference
                .canonical_key()
                .cmp(&b.reference.canonical_key())
                .then_with(|| a.translation.cmp(&b.translation))
        });

        let mut postings: HashMap<String, Vec<Posting>> = HashMap::new();
        let mut doc_counts: HashMap<String, u32> = HashMap::new();

        for (doc_id, doc) in docs.iter().enumerate() {
            *doc_counts.entry(doc.translation.clone()).or_insert(0) += 1;

            let mut occurrences: HashMap<String, Vec<u32>> = HashMap::new();
            for (position, token) in tokenize_text(&doc.text).into_iter().enumerate() {
                occurrences
                    .entry(token.term)
                    .or_default()
                    .push(position as u32);
            }
            for (term, positions) in occurrences {
                postings.entry(term).or_default().push(Posting {
                    doc: doc_id as u32,
                    tf: positions.len() as u32,
                    positions,
                });
            }
        }

        // Doc ids were assigned in ascending order; keep each list that way.
        for list in postings.values_mut() {
            list.sort_by_key(|p| p.doc);
        }

        Self {
            docs,
            postings,
            doc_counts,
        }
    }

    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    fn in_scope(&self, doc: &DocEntry, scope: Option<&HashSet<String>>) -> bool {
        scope.map(|s| s.contains(&doc.translation)).unwrap_or(true)
    }

    fn scoped_doc_count(&self, scope: Option<&HashSet<String>>) -> u64 {
        match scope {
            None => self.docs.len() as u64,
            Some(s) => s
                .iter()
                .map(|t| *self.doc_counts.get(t).unwrap_or(&0) as u64)
                .sum(),
        }
    }

    fn query(
        &self,
        text: &str,
        scope: Option<&HashSet<String>>,
        top_k: usize,
    ) -> Vec<SearchResult> {
        // Repeated query terms score once.
        let mut terms: Vec<String> = Vec::new();
        for term in tokenize_query(text) {
            if !terms.contains(&term) {
                terms.push(term);
            }
        }
        if terms.is_empty() {
            return Vec::new();
        }

        let n = self.scoped_doc_count(scope);
        let mut scores: HashMap<u32, f64> = HashMap::new();
        let mut matched_terms: HashSet<&str> = HashSet::new();

        for term in &terms {
            let Some(list) = self.postings.get(term) else {
                continue;
            };
            let scoped: Vec<&Posting> = list
                .iter()
                .filter(|p| self.in_scope(&self.docs[p.doc as usize], scope))
                .collect();
            if scoped.is_empty() {
                continue;
            }
            matched_terms.insert(term.as_str());
            let df = scoped.len() as u64;
            let idf = (((n + 1) as f64) / ((df + 1) as f64)).ln() + 1.0;
            for posting in scoped {
                *scores.entry(posting.doc).or_insert(0.0) += posting.tf as f64 * idf;
            }
        }

        let mut ranked: Vec<(u32, f64)> = scores.into_iter().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(top_k);

        ranked
            .into_iter()
            .map(|(doc_id, score)| {
                let doc = &self.docs[doc_id as usize];
                let highlights = tokenize_text(&doc.text)
                    .into_iter()
                    .filter(|t| matched_terms.contains(t.term.as_str()))
                    .map(|t| (t.start, t.end))
                    .collect();
                SearchResult {
                    reference: doc.reference.clone(),
                    translation: doc.translation.clone(),
                    score,
                    text: doc.text.clone(),
                    highlights,
                }
            })
            .collect()
    }
}

/// The read-mostly index handle shared across request handlers.
pub struct SearchIndex {
    snapshot: RwLock<Option<Arc<IndexSnapshot>>>,
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchIndex {
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(None),
        }
    }

    /// Build a complete new snapshot and publish it in one swap. Runs outside the
    /// request-serving path; readers keep whichever snapshot they already cloned.
    pub fn rebuild(&self, verses: &[Verse]) {
        let snapshot = Arc::new(IndexSnapshot::build(verses));
        tracing::info!(
            docs = snapshot.doc_count(),
            terms = snapshot.term_count(),
            "search index rebuilt"
        );
        let mut guard = self.snapshot.write().expect("index handle poisoned");
        *guard = Some(snapshot);
    }

    fn load(&self) -> Option<Arc<IndexSnapshot>> {
        self.snapshot
            .read()
            .expect("index handle poisoned")
            .clone()
    }

    /// Ranked lookup. An empty `translations` slice searches every loaded
    /// translation; `top_k <= 0` is an input error.
    pub fn query(
        &self,
        text: &str,
        translations: &[String],
        top_k: i64,
    ) -> Result<Vec<SearchResult>, IndexError> {
        if top_k <= 0 {
            return Err(IndexError::InvalidTopK { got: top_k });
        }
        let snapshot = self.load().ok_or(IndexError::NotBuilt)?;

        let scope: Option<HashSet<String>> = if translations.is_empty() {
            None
        } else {
            Some(translations.iter().map(|t| t.to_uppercase()).collect())
        };

        Ok(snapshot.query(text, scope.as_ref(), top_k as usize))
    }
}
