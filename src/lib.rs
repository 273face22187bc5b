//! Scripture Reference Resolution & Search Engine Library
//!
//! This library crate defines the core modules that serve Bible text across multiple
//! translations. It is the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of six loosely coupled subsystems, leaf-first:
//!
//! - **`canon`**: The immutable addressing scheme. A static book registry plus per-
//!   translation chapter/verse extents derived from the loaded corpus, built once
//!   at startup and shared read-only.
//! - **`reference`**: The reference parser. Turns human-written references
//!   ("John 3:16", "Gen 1:1-3", "Ps 23") into canonical coordinates validated
//!   against the canon.
//! - **`store`**: The verse text boundary. An abstract `VerseStore` contract plus an
//!   in-memory implementation; callers treat fetches as an asynchronous I/O boundary.
//! - **`search`**: The core information retrieval logic. Tokenization, the inverted
//!   index, tf-idf ranking, and atomic snapshot publication.
//! - **`engine`**: The façade. Accepts either a reference or free-text input,
//!   orchestrates the components above into one tagged outcome, and exposes the
//!   HTTP surface.
//! - **`ingestion`**: Load-time intake. Parses extracted translation files and
//!   assembles the canon, store contents, and index input in one consistent pass.

pub mod canon;
pub mod engine;
pub mod ingestion;
pub mod reference;
pub mod search;
pub mod store;
