// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning ranked document indices into the result shape callers see.
//!
//! Everything is copied verbatim from the document record, except passthrough
//! keys that would collide with a result field. The two score
//! fields get the same BM25 total; `combined_score` is where a semantic signal
//! would be blended in later, as a pass over these results.

use std::collections::HashMap;

use crate::scoring::ranking::RankedDoc;
use crate::types::{
    DocumentRecord, Passthrough, ScoredResult, SearchIndex, TermContribution,
};

/// Result fields a passthrough key must not shadow. The record's own fields
/// (`path`, `title` and so on) never reach `extra`, so only these can collide.
const RESERVED_RESULT_KEYS: [&str; 4] = [
    "documentIndex",
    "lexicalScore",
    "combinedScore",
    "matchedTerms",
];

fn passthrough_for_result(doc: &DocumentRecord) -> Passthrough {
    doc.extra
        .iter()
        .filter(|(key, _)| !RESERVED_RESULT_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Build one result from a document record and its total score.
pub fn project_document(
    doc_index: usize,
    doc: &DocumentRecord,
    score: f64,
    matched_terms: Vec<TermContribution>,
) -> ScoredResult {
    ScoredResult {
        document_index: doc_index,
        path: doc.path.clone(),
        title: doc.title.clone(),
        summary: doc.summary.clone(),
        weave: doc.weave.clone(),
        loom: doc.loom.clone(),
        extra: passthrough_for_result(doc),
        lexical_score: score,
        combined_score: score,
        matched_terms,
    }
}

/// Project an already ranked list, preserving its order.
///
/// Indices that don't resolve to a document are dropped. The ranker only
/// sees resolvable indices, so in practice this never filters anything.
pub(crate) fn project(
    index: &SearchIndex,
    ranked: &[RankedDoc],
    mut contributions: HashMap<u32, Vec<TermContribution>>,
) -> Vec<ScoredResult> {
    ranked
        .iter()
        .filter_map(|r| {
            let doc = index.document_at(r.doc_index as usize)?;
            let terms = contributions.remove(&r.doc_index).unwrap_or_default();
            Some(project_document(r.doc_index as usize, doc, r.score, terms))
        })
        .collect()
}
