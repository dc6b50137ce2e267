// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: query in, ranked results out.
//!
//! ```text
//! query ──▶ parse_query ──▶ for each term: postings_for ──▶ term_score
//!                                                              │
//!           results ◀── project ◀── rank ◀── accumulate ◀─────┘
//! ```
//!
//! A search is a pure function of the query and the snapshot. No I/O, no
//! locks, no mutation. The engine shares its snapshot through an `Arc`, so
//! cloning an engine or handing it to another thread is cheap.

use std::sync::Arc;

use crate::scoring::ranking::rank;
use crate::scoring::{term_score, Bm25Params, TermStats};
use crate::types::{ScoredResult, SearchIndex, SearchOptions};

use super::accumulator::ScoreAccumulator;
use super::project::project;
use super::utils::parse_query;

/// BM25 search over an immutable snapshot.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    index: Arc<SearchIndex>,
    params: Bm25Params,
}

impl SearchEngine {
    /// Create an engine with the default `k1 = 1.5`, `b = 0.75`.
    pub fn new(index: impl Into<Arc<SearchIndex>>) -> Self {
        Self::with_params(index, Bm25Params::default())
    }

    /// Create an engine with explicit tuning. Out-of-range values fall back
    /// to the defaults (see `Bm25Params::sanitized`).
    pub fn with_params(index: impl Into<Arc<SearchIndex>>, params: Bm25Params) -> Self {
        let index = index.into();
        let params = params.sanitized();

        tracing::debug!(
            target: "loomsearch::search",
            documents = index.document_count(),
            terms = index.term_count(),
            k1 = params.k1,
            b = params.b,
            "Search engine ready"
        );

        Self { index, params }
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// The shared snapshot, for handing to another engine or slot.
    pub fn shared_index(&self) -> Arc<SearchIndex> {
        Arc::clone(&self.index)
    }

    pub fn params(&self) -> Bm25Params {
        self.params
    }

    /// Search with default options (top 20).
    pub fn search(&self, query: &str) -> Vec<ScoredResult> {
        self.search_with(query, &SearchOptions::default())
    }

    /// Search with explicit options.
    ///
    /// Never fails. Empty, stop-word-only, or unmatched queries return an
    /// empty list.
    pub fn search_with(&self, query: &str, options: &SearchOptions) -> Vec<ScoredResult> {
        let terms = parse_query(query);
        self.search_terms(&terms, options)
    }

    /// Score already-normalized terms.
    ///
    /// Terms are looked up verbatim, so callers bypassing `parse_query` must
    /// normalize the way the index builder did.
    pub fn search_terms<S: AsRef<str>>(
        &self,
        terms: &[S],
        options: &SearchOptions,
    ) -> Vec<ScoredResult> {
        if terms.is_empty() || options.limit == 0 || !self.index.is_searchable() {
            return Vec::new();
        }

        let stats = self.index.corpus_stats();
        let mut accumulator = ScoreAccumulator::new(options.explain);
        let mut skipped = 0usize;

        for term in terms {
            let term = term.as_ref();
            let postings = self.index.postings_for(term);
            if postings.is_empty() {
                continue;
            }

            let term_stats = TermStats::new(
                stats.total_documents,
                postings.len(),
                stats.average_document_length,
            );

            for (doc_index, tf) in postings.iter() {
                // Malformed postings cost a candidate, never a panic
                let Some(doc) = self.index.document_at(doc_index as usize) else {
                    skipped += 1;
                    continue;
                };
                if tf == 0 {
                    skipped += 1;
                    continue;
                }

                let score = term_score(&self.params, &term_stats, tf, doc.document_length);
                accumulator.add(doc_index, term, score);
            }
        }

        if skipped > 0 {
            tracing::debug!(
                target: "loomsearch::search",
                skipped,
                "Skipped malformed postings"
            );
        }

        let candidates = accumulator.len();
        let (docs, contributions) = accumulator.finish();
        let ranked = rank(docs, options.limit);
        let results = project(&self.index, &ranked, contributions);

        tracing::debug!(
            target: "loomsearch::search",
            terms = terms.len(),
            candidates,
            returned = results.len(),
            "Search complete"
        );

        results
    }
}
