//! Ingestion Module
//!
//! Turns extracted corpus files into the in-memory corpus everything else is built from.
//!
//! ## Workflow
//! 1. **Read**: JSON translation files from the data directory, one file per translation.
//! 2. **Validate**: book names resolve against the registry; bad data aborts the load.
//! 3. **Normalize**: verse text is trimmed and a diacritic-folded searchable form is derived.
//! 4. **Assemble**: canon model, verse store contents, and the index-build input all
//!    come out of one pass, so parser and store can never disagree about the canon.

pub mod loader;
pub mod types;
