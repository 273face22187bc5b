//! Search Index Module
//!
//! Ranked full-text retrieval over verse text, within and across translations.
//!
//! ## Overview
//! This module implements the Information Retrieval (IR) pipeline of the engine.
//! Verse text is tokenized into normalized terms and folded into an inverted index;
//! queries run the same tokenization and rank matching verses with a tf-idf score,
//! one verse being one document.
//!
//! ## Responsibilities
//! - **Tokenization**: lowercasing, punctuation stripping, diacritic folding, and a
//!   minimal suffix stemmer, applied identically at build and query time.
//! - **Ranking**: `tf * idf` with `idf = ln((N+1)/(df+1)) + 1`, ties broken by
//!   canonical reference order for determinism.
//! - **Snapshotting**: rebuilds construct a complete new index off to the side and
//!   publish it with a single swap; readers never observe a partial index.
//!
//! ## Submodules
//! - **`index`**: snapshot construction, postings, and the query path.
//! - **`tokenizer`**: text processing shared by indexing and querying.
//! - **`types`**: `SearchResult` and `IndexError`.

pub mod index;
pub mod tokenizer;
pub mod types;

#[cfg(test)]
mod tests;
