//! Search Types
//!
//! Query results and the index error taxonomy. Results are ephemeral: produced per
//! query, never persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reference::types::Reference;

/// One ranked verse hit.
///
/// `highlights` holds byte spans into `text` covering the matched query terms, for
/// the transport layer to mark up however it likes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub reference: Reference,
    pub translation: String,
    pub score: f64,
    pub text: String,
    pub highlights: Vec<(usize, usize)>,
}

/// Failures on the query path of the search index.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("search index has not been built yet")]
    NotBuilt,
    #[error("top_k must be positive (got {got})")]
    InvalidTopK { got: i64 },
}
