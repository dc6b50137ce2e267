// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! BM25 full-text search over a prebuilt, immutable inverted index.
//!
//! The index is built offline, shipped as a JSON snapshot, and loaded once.
//! Every search afterwards is a pure read: normalize the query, walk the
//! posting lists, score with Okapi BM25, rank, project.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ util/        │────▶│ search/utils │────▶│ search/engine│
//! │ (normalize,  │     │ (parse_query)│     │ (SearchEngine│
//! │  stop words) │     └──────────────┘     │  ::search)   │
//! └──────────────┘                          └──────┬───────┘
//!        │                                         │
//!        ▼                                         ▼
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ build/       │────▶│ types, index │◀────│ scoring/     │
//! │ (reference   │     │ (SearchIndex,│     │ (BM25, rank) │
//! │  builder)    │     │  accessors)  │     └──────────────┘
//! └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use loomsearch::{SearchEngine, SearchIndex, SearchOptions};
//!
//! let index = SearchIndex::load("index.json")?;
//! let engine = SearchEngine::new(index);
//!
//! for hit in engine.search_with("typescript generics", &SearchOptions::with_limit(5)) {
//!     println!("{:.3} {}", hit.combined_score, hit.path);
//! }
//! ```

// Module declarations
pub mod build;
pub mod error;
mod index;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
pub mod util;
pub mod verify;

// Re-exports for public API
pub use build::{build_index, IndexBuilder, SourceDocument};
pub use error::{BuildError, IndexError};
pub use scoring::{Bm25Params, DEFAULT_B, DEFAULT_K1};
pub use search::{parse_query, EngineSlot, SearchEngine};
pub use types::{
    CorpusStats, DocumentRecord, Passthrough, PostingList, ScoredResult, SearchIndex,
    SearchOptions, TermContribution, DEFAULT_LIMIT,
};
pub use util::normalize::{normalize, tokenize};
pub use verify::{verify_index, IndexIssue, VerificationReport};
