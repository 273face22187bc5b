//! Reference Parser Module
//!
//! Turns human-written scripture references into canonical coordinates.
//!
//! ## Overview
//! Input like `"John 3:16"`, `"Gen 1:1-3"`, or `"Ps 23"` is resolved against the
//! Canon Model into one or more `Reference` values: (book, chapter, verse range)
//! coordinates validated against the bounds of a translation's canon (or the union
//! of all loaded canons when no translation is given).
//!
//! ## Grammar
//! `<book-name> <chapter>[:<verse>[-<verse>]][, <chapter>[:<verse>...]]*`
//!
//! Book-only input expands to every chapter of the book; book+chapter expands to the
//! chapter's full verse span. Cross-chapter verse ranges are explicitly unsupported.
//!
//! ## Submodules
//! - **`parser`**: longest-prefix book matching and chapter/verse parsing.
//! - **`types`**: the `Reference` value type and `ParseError` taxonomy.

pub mod parser;
pub mod types;

#[cfg(test)]
mod tests;
