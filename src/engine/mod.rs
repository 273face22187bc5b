//! Query Engine Module
//!
//! The façade the transport layer talks to.
//!
//! ## Overview
//! `resolve` accepts either a scripture reference or free-text search input and
//! orchestrates the parser, verse store, and search index into a single tagged
//! outcome. References are attempted first; unrecognizable or unsupported input
//! falls back to ranked search; a reference with a correctable mistake (out-of-range
//! chapter or verse, book outside the translation's canon) surfaces as a failure
//! carrying the violated bound instead of being demoted to search.
//!
//! ## Responsibilities
//! - **Decision policy**: reference-first resolution with the fallback rules above.
//! - **Store discipline**: every fetch runs under a caller-configured timeout with
//!   at most one retry on timeout; unavailability surfaces immediately. Work stops
//!   between coarse steps when the caller drops the request future.
//! - **API**: exposing `resolve` and translation metadata over HTTP for the
//!   transport layer.
//!
//! ## Submodules
//! - **`engine`**: `QueryEngine` orchestration.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: `QueryOutcome` and `FailureReason`.

pub mod engine;
pub mod handlers;
pub mod types;
