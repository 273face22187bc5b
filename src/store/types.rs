//! Verse Store Types
//!
//! The verse record handed across the store boundary and the store error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reference::types::Reference;

/// One verse of one translation.
///
/// `reference` always addresses a single verse (`verse_start == verse_end`).
/// `text` is the display form; `text_normalized` is the lowercased, diacritic-folded
/// form derived once at load time, served alongside for accent-insensitive clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    pub translation: String,
    pub reference: Reference,
    pub text: String,
    pub text_normalized: String,
}

/// Failures at the persistence boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no text for {reference} in {translation}")]
    NotFound {
        translation: String,
        reference: Reference,
    },
    #[error("verse store timed out")]
    Timeout,
    #[error("verse store unavailable: {detail}")]
    Unavailable { detail: String },
}
