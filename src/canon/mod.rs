//! Canon Model Module
//!
//! The immutable book/chapter/verse addressing scheme shared by every other component.
//!
//! ## Overview
//! A translation's canon is the exact set of books, chapters, and verses it contains,
//! with its numbering. This module owns a static registry of the sixty-six protestant
//! books (keys, ordinals, display names, accepted abbreviations) and builds one
//! `CanonModel` at startup from the loaded corpus. The model is immutable after load
//! and shared behind an `Arc`, so no locking is ever required.
//!
//! ## Responsibilities
//! - **Name resolution**: mapping human book names and abbreviations ("Gen", "1 Jn",
//!   "Song of Solomon") to a single registry entry, case- and punctuation-insensitive.
//! - **Extents**: per-translation chapter counts and per-chapter verse counts, derived
//!   from the verses actually loaded, plus a union extent for canon-agnostic parsing.
//! - **Load-time invariants**: no two books may share a resolvable normalized name and
//!   no two translations may share an identifier; violations abort startup.
//!
//! ## Submodules
//! - **`books`**: the static book registry.
//! - **`model`**: `CanonModel` construction and lookup contract.
//! - **`types`**: `Book`, `Translation`, extent types, and `ConfigError`.

pub mod books;
pub mod model;
pub mod types;
