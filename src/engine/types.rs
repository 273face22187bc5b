//! Query Engine Types
//!
//! The tagged outcome every caller must handle, and the recovered failure taxonomy.

use thiserror::Error;

use crate::reference::types::{ParseError, Reference};
use crate::search::types::{IndexError, SearchResult};
use crate::store::types::{StoreError, Verse};

/// Result of resolving one input string.
///
/// Exactly one of: a reference match with its verse text, a ranked search match, or
/// a typed failure. Errors are never silently converted to an empty result set.
#[derive(Debug)]
pub enum QueryOutcome {
    ReferenceMatch {
        references: Vec<Reference>,
        verses: Vec<Verse>,
    },
    SearchMatch {
        results: Vec<SearchResult>,
    },
    Failure {
        reason: FailureReason,
    },
}

/// Recovered errors surfaced to the caller with enough structure to render a
/// precise message (kind plus the relevant bound or id).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FailureReason {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error("unknown translation '{id}'")]
    UnknownTranslation { id: String },
}
