// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Invariant violations a snapshot can carry.
//!
//! None of these stop a search. They're what a builder bug looks like from the
//! outside, so `verify_index` collects all of them instead of stopping at the
//! first.

use serde::Serialize;
use thiserror::Error;

/// One invariant violation found in a snapshot.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum IndexIssue {
    /// Posting points past the end of `documents`
    #[error("posting for '{term}' references document {document_index} (only {document_count} documents)")]
    PostingOutOfRange {
        term: String,
        document_index: u32,
        document_count: usize,
    },

    /// Same document listed twice in one posting list
    #[error("posting list for '{term}' lists document {document_index} more than once")]
    DuplicatePosting { term: String, document_index: u32 },

    /// Posting with a term frequency of zero
    #[error("posting for '{term}' in document {document_index} has zero frequency")]
    ZeroFrequency { term: String, document_index: u32 },

    /// Term with no postings at all
    #[error("posting list for '{term}' is empty")]
    EmptyPostingList { term: String },

    /// `corpusStats.totalDocuments` doesn't match `documents.len()`
    #[error("corpusStats.totalDocuments is {stated} but there are {actual} documents")]
    DocumentCountMismatch { stated: u32, actual: usize },

    /// `corpusStats.averageDocumentLength` doesn't match the documents
    #[error("corpusStats.averageDocumentLength is {stated} but documents average {actual}")]
    AverageLengthMismatch { stated: f64, actual: f64 },

    /// `corpusStats.vocabularySize` doesn't match the vocabulary
    #[error("corpusStats.vocabularySize is {stated} but the vocabulary has {actual} terms")]
    VocabularySizeMismatch { stated: u32, actual: usize },

    /// Two documents share a path
    #[error("documents {first} and {second} share path '{path}'")]
    DuplicatePath {
        path: String,
        first: usize,
        second: usize,
    },
}

/// Everything `verify_index` found.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub documents: usize,
    pub terms: usize,
    pub postings: usize,
    pub issues: Vec<IndexIssue>,
}

impl VerificationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
