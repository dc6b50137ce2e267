// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! These types define the snapshot the engine reads and the results it hands
//! back. The snapshot is produced upstream, serialized as JSON, and never
//! mutated once it lands here.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **PostingList**: `doc_indices.len() == frequencies.len()`.
//!   Private fields, so the only way to break this is from inside the module.
//!
//! - **Posting**: `document_index < documents.len() ∧ term_frequency > 0`.
//!   The engine tolerates violations (they get skipped), `verify_index` reports them.
//!
//! - **Posting uniqueness**: at most one entry per document per term.
//!
//! The engine doesn't trust any of this at search time. Malformed postings cost
//! a dropped candidate, never a panic.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Default number of results returned by a search.
pub const DEFAULT_LIMIT: usize = 20;

/// Arbitrary display fields carried through from the snapshot to the results.
///
/// `BTreeMap` keeps key order stable, so serialized results are deterministic.
pub type Passthrough = BTreeMap<String, serde_json::Value>;

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// One document in the snapshot.
///
/// `path` is the stable identifier, `document_length` the token count used for
/// length normalization. Everything the engine doesn't know about lands in
/// `extra` and is copied verbatim into results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub path: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub document_length: u32,
    /// Top-level grouping label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weave: Option<String>,
    /// Second-level grouping label within a weave
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loom: Option<String>,
    #[serde(flatten)]
    pub extra: Passthrough,
}

// =============================================================================
// POSTINGS
// =============================================================================

/// All occurrences of a single term across the corpus.
///
/// Stored struct-of-arrays: two parallel `Vec<u32>` instead of a `Vec` of
/// tuples. On the wire it's still a list of `[documentIndex, termFrequency]`
/// pairs; the conversion happens in serde's `from`/`into` hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(u32, u32)>", into = "Vec<(u32, u32)>")]
pub struct PostingList {
    doc_indices: Vec<u32>,
    frequencies: Vec<u32>,
}

impl PostingList {
    /// A list with no postings.
    pub const EMPTY: PostingList = PostingList {
        doc_indices: Vec::new(),
        frequencies: Vec::new(),
    };

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            doc_indices: Vec::with_capacity(capacity),
            frequencies: Vec::with_capacity(capacity),
        }
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut list = Self::new();
        for (doc_index, frequency) in pairs {
            list.push(doc_index, frequency);
        }
        list
    }

    pub fn push(&mut self, doc_index: u32, frequency: u32) {
        self.doc_indices.push(doc_index);
        self.frequencies.push(frequency);
    }

    /// Document frequency as the scorer sees it: the raw list length.
    #[inline]
    pub fn len(&self) -> usize {
        self.doc_indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.doc_indices.is_empty()
    }

    pub fn doc_indices(&self) -> &[u32] {
        &self.doc_indices
    }

    pub fn frequencies(&self) -> &[u32] {
        &self.frequencies
    }

    /// Iterate `(document_index, term_frequency)` pairs in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.doc_indices
            .iter()
            .copied()
            .zip(self.frequencies.iter().copied())
    }
}

impl From<Vec<(u32, u32)>> for PostingList {
    fn from(pairs: Vec<(u32, u32)>) -> Self {
        let mut list = PostingList::with_capacity(pairs.len());
        for (doc_index, frequency) in pairs {
            list.push(doc_index, frequency);
        }
        list
    }
}

impl From<PostingList> for Vec<(u32, u32)> {
    fn from(list: PostingList) -> Self {
        list.doc_indices.into_iter().zip(list.frequencies).collect()
    }
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Corpus-wide statistics precomputed by the index builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusStats {
    pub total_documents: u32,
    /// Mean document length. Zero is legal (every document empty).
    pub average_document_length: f64,
    /// Informational only; the engine never reads it.
    #[serde(default)]
    pub vocabulary_size: u32,
}

/// The complete immutable snapshot: documents, vocabulary, and corpus stats.
///
/// Built once upstream, loaded once here, read by every search afterwards.
/// Nothing in this crate takes `&mut SearchIndex`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndex {
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,
    #[serde(default)]
    pub vocabulary: HashMap<String, PostingList>,
    /// Required. Zeroed stats would turn idf negative and invert ranking.
    pub corpus_stats: CorpusStats,
    /// Reserved for semantic vectors. Opaque; carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeddings_blob: Option<serde_json::Value>,
}

// =============================================================================
// QUERY & RESULTS
// =============================================================================

/// Per-call search options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    /// Maximum number of results. Zero yields an empty list.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Attach per-term contributions to each result.
    #[serde(default)]
    pub explain: bool,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            explain: false,
        }
    }
}

impl SearchOptions {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn explained(mut self) -> Self {
        self.explain = true;
        self
    }
}

/// How much one query term added to a result's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermContribution {
    pub term: String,
    pub score: f64,
}

/// What callers get back: one per matching document.
///
/// `lexical_score` and `combined_score` are equal today. They are separate
/// fields so a semantic signal can be blended into `combined_score` later
/// without changing this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    pub document_index: usize,
    pub path: String,
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weave: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loom: Option<String>,
    #[serde(flatten)]
    pub extra: Passthrough,
    pub lexical_score: f64,
    pub combined_score: f64,
    /// Populated only when `SearchOptions::explain` is set
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_terms: Vec<TermContribution>,
}
