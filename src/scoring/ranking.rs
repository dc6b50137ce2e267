// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how accumulated scores get sorted.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Document index** - ascending, i.e. original snapshot order
//!
//! That's it. No title tiebreak, no randomization. Two documents with the same
//! score come out in the order the builder wrote them.

use std::cmp::Ordering;

/// A document and its running BM25 total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedDoc {
    pub doc_index: u32,
    pub score: f64,
}

/// Compare two ranked documents: higher score first, then lower index.
///
/// `total_cmp` keeps this a total order even if a NaN ever sneaks in, so
/// `sort_by` can't be handed an inconsistent comparator.
pub fn compare_ranked(a: &RankedDoc, b: &RankedDoc) -> Ordering {
    match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.doc_index.cmp(&b.doc_index),
        ord => ord,
    }
}

/// Sort in place and keep the top `limit`.
pub fn rank(mut docs: Vec<RankedDoc>, limit: usize) -> Vec<RankedDoc> {
    docs.sort_by(compare_ranked);
    docs.truncate(limit);
    docs
}
