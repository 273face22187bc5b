//! Verse Store Module
//!
//! The contract between the engine and whatever holds verse text.
//!
//! ## Overview
//! The core never talks to a database directly; it fetches verse text through the
//! `VerseStore` trait given canonical coordinates and a translation id. The call may
//! suspend on external I/O, so callers treat it as an asynchronous boundary and wrap
//! it in their own timeout. An in-memory implementation backs the binary and tests.
//!
//! ## Submodules
//! - **`memory`**: `MemoryVerseStore`, a `DashMap`-backed implementation populated at load time.
//! - **`types`**: the `Verse` record and `StoreError` taxonomy.

pub mod memory;
pub mod types;


use async_trait::async_trait;

use crate::reference::types::Reference;

use self::types::{StoreError, Verse};

/// Fetch verse text for canonical coordinates within one translation.
///
/// Implementations return the verses for every requested reference in canonical
/// order. Gaps inside a verse range are tolerated (translations bridge verses), but
/// a reference that matches nothing at all is `StoreError::NotFound`.
#[async_trait]
pub trait VerseStore: Send + Sync {
    async fn fetch_verses(
        &self,
        translation: &str,
        references: &[Reference],
    ) -> Result<Vec<Verse>, StoreError>;
}
