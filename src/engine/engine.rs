//! Query Orchestration
//!
//! Reference-first resolution over the parser, verse store, and search index.

use std::sync::Arc;
use std::time::Duration;

use crate::canon::model::CanonModel;
use crate::reference::parser::ReferenceParser;
use crate::reference::types::Reference;
use crate::search::index::SearchIndex;
use crate::store::types::{StoreError, Verse};
use crate::store::VerseStore;

use super::types::{FailureReason, QueryOutcome};

pub struct QueryEngine {
    canon: Arc<CanonModel>,
    parser: ReferenceParser,
    index: Arc<SearchIndex>,
    store: Arc<dyn VerseStore>,
    store_timeout: Duration,
}

impl QueryEngine {
    pub fn new(
        canon: Arc<CanonModel>,
        index: Arc<SearchIndex>,
        store: Arc<dyn VerseStore>,
        store_timeout: Duration,
    ) -> Self {
        let parser = ReferenceParser::new(canon.clone());
        Self {
            canon,
            parser,
            index,
            store,
            store_timeout,
        }
    }

    /// Resolve one input string against an optional translation scope.
    ///
    /// Attempts reference parsing first. Input that plainly isn't a reference falls
    /// back to ranked search; a reference with a correctable mistake becomes a
    /// `Failure` carrying the violated bound. `top_k` caps search results.
    pub async fn resolve(
        &self,
        input: &str,
        translation: Option<&str>,
        top_k: i64,
    ) -> QueryOutcome {
        if let Some(id) = translation {
            if self.canon.translation(id).is_none() {
                return QueryOutcome::Failure {
                    reason: FailureReason::UnknownTranslation {
                        id: id.to_uppercase(),
                    },
                };
            }
        }

        match self.parser.parse(input, translation) {
            Ok(references) => self.fetch_outcome(references, translation).await,
            Err(err) if err.is_non_reference() => {
                tracing::debug!(input, %err, "not a reference, falling back to search");
                self.search_outcome(input, translation, top_k)
            }
            Err(err) => QueryOutcome::Failure {
                reason: FailureReason::Parse(err),
            },
        }
    }

    async fn fetch_outcome(
        &self,
        references: Vec<Reference>,
        translation: Option<&str>,
    ) -> QueryOutcome {
        let targets: Vec<String> = match translation {
            Some(id) => vec![id.to_uppercase()],
            None => self
                .canon
                .translations()
                .iter()
                .map(|t| t.id.clone())
                .collect(),
        };

        let mut verses: Vec<Verse> = Vec::new();
        let mut last_not_found: Option<StoreError> = None;

        for target in &targets {
            match self.fetch_with_retry(target, &references).await {
                Ok(found) => verses.extend(found),
                Err(err @ StoreError::NotFound { .. }) if targets.len() > 1 => {
                    // Canon-agnostic input: a translation that lacks the passage is
                    // skipped as long as some other translation has it.
                    last_not_found = Some(err);
                }
                Err(err) => {
                    return QueryOutcome::Failure {
                        reason: FailureReason::Store(err),
                    };
                }
            }
        }

        if verses.is_empty() {
            let reason = last_not_found
                .map(FailureReason::Store)
                .unwrap_or(FailureReason::Store(StoreError::Unavailable {
                    detail: "no translations loaded".to_string(),
                }));
            return QueryOutcome::Failure { reason };
        }

        QueryOutcome::ReferenceMatch { references, verses }
    }

    /// One bounded retry on timeout; unavailability surfaces immediately.
    async fn fetch_with_retry(
        &self,
        translation: &str,
        references: &[Reference],
    ) -> Result<Vec<Verse>, StoreError> {
        match self.try_fetch(translation, references).await {
            Err(StoreError::Timeout) => {
                tracing::warn!(translation, "verse store timed out, retrying once");
                self.try_fetch(translation, references).await
            }
            other => other,
        }
    }

    async fn try_fetch(
        &self,
        translation: &str,
        references: &[Reference],
    ) -> Result<Vec<Verse>, StoreError> {
        tokio::time::timeout(
            self.store_timeout,
            self.store.fetch_verses(translation, references),
        )
        .await
        .map_err(|_| StoreError::Timeout)?
    }

    fn search_outcome(&self, input: &str, translation: Option<&str>, top_k: i64) -> QueryOutcome {
        let scope: Vec<String> = translation.map(|t| vec![t.to_string()]).unwrap_or_default();
        match self.index.query(input, &scope, top_k) {
            Ok(results) => QueryOutcome::SearchMatch { results },
            Err(err) => QueryOutcome::Failure {
                reason: FailureReason::Index(err),
            },
        }
    }
}
