// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-only access to an index snapshot.
//!
//! The accessor is nothing more than a set of borrowing methods on
//! `SearchIndex`. No caching and no derived state. If the snapshot says
//! something, that's what you get back.

mod snapshot;

use crate::types::{CorpusStats, DocumentRecord, PostingList, SearchIndex};

/// Shared empty list for unknown terms, so lookups can always return a reference.
static EMPTY_POSTINGS: PostingList = PostingList::EMPTY;

impl SearchIndex {
    /// Posting list for a normalized term. Unknown terms get an empty list.
    pub fn postings_for(&self, term: &str) -> &PostingList {
        self.vocabulary.get(term).unwrap_or(&EMPTY_POSTINGS)
    }

    /// Document record at `index`, or `None` if the index is out of range.
    #[inline]
    pub fn document_at(&self, index: usize) -> Option<&DocumentRecord> {
        self.documents.get(index)
    }

    /// The precomputed corpus statistics, exactly as stored.
    #[inline]
    pub fn corpus_stats(&self) -> CorpusStats {
        self.corpus_stats
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn term_count(&self) -> usize {
        self.vocabulary.len()
    }

    /// Does the snapshot have anything a query could ever match?
    pub fn is_searchable(&self) -> bool {
        !self.documents.is_empty() && !self.vocabulary.is_empty()
    }
}
