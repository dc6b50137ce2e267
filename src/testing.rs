//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{CorpusStats, DocumentRecord, Passthrough, PostingList, SearchIndex};

/// Create a simple document record with default fields.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(id: usize, title: &str, document_length: u32) -> DocumentRecord {
    DocumentRecord {
        path: format!("/doc/{}", id),
        title: title.to_string(),
        summary: format!("Summary for {}", title),
        document_length,
        weave: None,
        loom: None,
        extra: Passthrough::new(),
    }
}

/// Create a document record with grouping labels.
pub fn make_grouped_record(
    id: usize,
    title: &str,
    document_length: u32,
    weave: &str,
    loom: &str,
) -> DocumentRecord {
    DocumentRecord {
        weave: Some(weave.to_string()),
        loom: Some(loom.to_string()),
        ..make_record(id, title, document_length)
    }
}

/// Stats that agree with the given documents and vocabulary size.
pub fn stats_for(documents: &[DocumentRecord], vocabulary_size: usize) -> CorpusStats {
    let total: u64 = documents
        .iter()
        .map(|d| u64::from(d.document_length))
        .sum();
    let average_document_length = if documents.is_empty() {
        0.0
    } else {
        total as f64 / documents.len() as f64
    };
    CorpusStats {
        total_documents: documents.len() as u32,
        average_document_length,
        vocabulary_size: vocabulary_size as u32,
    }
}

/// Assemble a snapshot from documents and raw posting lists, with consistent stats.
pub fn index_from_postings(
    documents: Vec<DocumentRecord>,
    postings: Vec<(&str, PostingList)>,
) -> SearchIndex {
    let vocabulary: std::collections::HashMap<String, PostingList> = postings
        .into_iter()
        .map(|(term, list)| (term.to_string(), list))
        .collect();
    let corpus_stats = stats_for(&documents, vocabulary.len());
    SearchIndex {
        documents,
        vocabulary,
        corpus_stats,
        embeddings_blob: None,
    }
}

/// The three-document corpus used throughout the tests.
///
/// | doc | term       | tf | length |
/// |-----|------------|----|--------|
/// | 0   | javascript | 2  | 10     |
/// | 1   | typescript | 3  | 12     |
/// | 2   | react      | 2  | 8      |
pub fn three_doc_index() -> SearchIndex {
    index_from_postings(
        vec![
            make_record(0, "JavaScript Basics", 10),
            make_record(1, "TypeScript Handbook", 12),
            make_record(2, "React Patterns", 8),
        ],
        vec![
            ("javascript", PostingList::from_pairs([(0, 2)])),
            ("typescript", PostingList::from_pairs([(1, 3)])),
            ("react", PostingList::from_pairs([(2, 2)])),
        ],
    )
}
