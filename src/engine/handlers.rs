//! HTTP Handlers
//!
//! The transport surface over the query engine and canon metadata. Handlers only
//! translate between HTTP and `QueryOutcome`; no resolution logic lives here.

use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::canon::model::CanonModel;
use crate::canon::types::TranslationInfo;
use crate::reference::types::Reference;
use crate::search::types::{IndexError, SearchResult};
use crate::store::types::{StoreError, Verse};

use super::engine::QueryEngine;
use super::types::{FailureReason, QueryOutcome};

const DEFAULT_LIMIT: i64 = 20;

#[derive(Deserialize)]
pub struct ResolveParams {
    pub input: String,
    pub translation: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolveResponse {
    Reference {
        references: Vec<Reference>,
        verses: Vec<Verse>,
    },
    Search {
        results: Vec<SearchResult>,
    },
    Failure {
        reason: String,
    },
}

pub async fn handle_resolve(
    Query(params): Query<ResolveParams>,
    Extension(engine): Extension<Arc<QueryEngine>>,
) -> (StatusCode, Json<ResolveResponse>) {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let outcome = engine
        .resolve(&params.input, params.translation.as_deref(), limit)
        .await;

    match outcome {
        QueryOutcome::ReferenceMatch { references, verses } => (
            StatusCode::OK,
            Json(ResolveResponse::Reference { references, verses }),
        ),
        QueryOutcome::SearchMatch { results } => {
            (StatusCode::OK, Json(ResolveResponse::Search { results }))
        }
        QueryOutcome::Failure { reason } => {
            let status = failure_status(&reason);
            (
                status,
                Json(ResolveResponse::Failure {
                    reason: reason.to_string(),
                }),
            )
        }
    }
}

fn failure_status(reason: &FailureReason) -> StatusCode {
    match reason {
        FailureReason::Parse(_) => StatusCode::UNPROCESSABLE_ENTITY,
        FailureReason::UnknownTranslation { .. } => StatusCode::NOT_FOUND,
        FailureReason::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
        FailureReason::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
        FailureReason::Index(IndexError::NotBuilt) => StatusCode::SERVICE_UNAVAILABLE,
        FailureReason::Index(IndexError::InvalidTopK { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

pub async fn handle_translations(
    Extension(canon): Extension<Arc<CanonModel>>,
) -> Json<Vec<TranslationInfo>> {
    Json(canon.translations().iter().map(TranslationInfo::from).collect())
}

#[derive(Serialize)]
pub struct ChapterInfo {
    pub chapter: u32,
    pub verse_count: u32,
}

#[derive(Serialize)]
pub struct BookMetadata {
    pub key: String,
    pub name: String,
    pub chapter_count: u32,
    pub chapters: Vec<ChapterInfo>,
}

#[derive(Serialize)]
pub struct TranslationMetadata {
    pub public_id: String,
    pub id: String,
    pub full_name: String,
    pub language_code: String,
    pub books: Vec<BookMetadata>,
    pub total_books: usize,
    pub total_chapters: u32,
    pub total_verses: u64,
}

pub async fn handle_translation_metadata(
    Path(id): Path<String>,
    Extension(canon): Extension<Arc<CanonModel>>,
) -> Result<Json<TranslationMetadata>, StatusCode> {
    let translation = canon.translation(&id).ok_or(StatusCode::NOT_FOUND)?;

    let mut total_chapters = 0u32;
    let mut total_verses = 0u64;
    let books: Vec<BookMetadata> = translation
        .books
        .iter()
        .map(|extent| {
            let chapters: Vec<ChapterInfo> = extent
                .chapters
                .iter()
                .enumerate()
                .map(|(i, count)| ChapterInfo {
                    chapter: i as u32 + 1,
                    verse_count: *count,
                })
                .collect();
            total_chapters += extent.chapter_count();
            total_verses += extent.chapters.iter().map(|c| *c as u64).sum::<u64>();
            BookMetadata {
                key: extent.book.key.to_string(),
                name: extent.book.name.to_string(),
                chapter_count: extent.chapter_count(),
                chapters,
            }
        })
        .collect();

    Ok(Json(TranslationMetadata {
        public_id: translation.public_id.clone(),
        id: translation.id.clone(),
        full_name: translation.full_name.clone(),
        language_code: translation.language_code.clone(),
        books,
        total_books: translation.books.len(),
        total_chapters,
        total_verses,
    }))
}
