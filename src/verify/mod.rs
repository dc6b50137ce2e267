// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snapshot verification: find every broken invariant, fail on none.
//!
//! The engine is deliberately forgiving at search time. That makes builder bugs
//! easy to miss, because a bad posting just quietly drops a candidate. This is
//! the place that notices. The CLI's `verify` command and the builder tests
//! both run it.

mod types;

pub use types::*;

use std::collections::{HashMap, HashSet};

use crate::types::SearchIndex;

/// Relative tolerance for the average-length check.
const AVG_LEN_TOLERANCE: f64 = 1e-6;

/// Check a snapshot against its invariants.
///
/// Issues come out in a stable order: corpus stats first, then duplicate
/// paths in document order, then postings by term (sorted), then by position
/// within each list.
pub fn verify_index(index: &SearchIndex) -> VerificationReport {
    let mut issues = Vec::new();
    let document_count = index.documents.len();
    let stats = index.corpus_stats;

    if stats.total_documents as usize != document_count {
        issues.push(IndexIssue::DocumentCountMismatch {
            stated: stats.total_documents,
            actual: document_count,
        });
    }

    let actual_avg = index.mean_document_length().unwrap_or(0.0);
    let stated_avg = stats.average_document_length;
    // Written as a negation so a NaN stated average is reported too
    if !((stated_avg - actual_avg).abs() <= AVG_LEN_TOLERANCE * actual_avg.max(1.0)) {
        issues.push(IndexIssue::AverageLengthMismatch {
            stated: stated_avg,
            actual: actual_avg,
        });
    }

    if stats.vocabulary_size as usize != index.vocabulary.len() {
        issues.push(IndexIssue::VocabularySizeMismatch {
            stated: stats.vocabulary_size,
            actual: index.vocabulary.len(),
        });
    }

    let mut first_seen: HashMap<&str, usize> = HashMap::with_capacity(document_count);
    for (i, doc) in index.documents.iter().enumerate() {
        if let Some(&first) = first_seen.get(doc.path.as_str()) {
            issues.push(IndexIssue::DuplicatePath {
                path: doc.path.clone(),
                first,
                second: i,
            });
        } else {
            first_seen.insert(doc.path.as_str(), i);
        }
    }

    let mut terms: Vec<&String> = index.vocabulary.keys().collect();
    terms.sort_unstable();

    let mut postings = 0usize;
    let mut seen: HashSet<u32> = HashSet::new();
    for term in terms {
        let list = &index.vocabulary[term];
        postings += list.len();

        if list.is_empty() {
            issues.push(IndexIssue::EmptyPostingList { term: term.clone() });
            continue;
        }

        seen.clear();
        for (doc_index, tf) in list.iter() {
            if doc_index as usize >= document_count {
                issues.push(IndexIssue::PostingOutOfRange {
                    term: term.clone(),
                    document_index: doc_index,
                    document_count,
                });
            }
            if !seen.insert(doc_index) {
                issues.push(IndexIssue::DuplicatePosting {
                    term: term.clone(),
                    document_index: doc_index,
                });
            }
            if tf == 0 {
                issues.push(IndexIssue::ZeroFrequency {
                    term: term.clone(),
                    document_index: doc_index,
                });
            }
        }
    }

    VerificationReport {
        documents: document_count,
        terms: index.vocabulary.len(),
        postings,
        issues,
    }
}
