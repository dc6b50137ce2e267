// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reference snapshot builder.
//!
//! Crawling and content extraction live upstream. This module takes text that
//! has already been extracted and produces a snapshot the engine can load. It
//! tokenizes with the exact function the query parser uses, so build-time and
//! query-time terms can't drift apart.
//!
//! `document_length` is the number of indexed tokens (after short-token and
//! stop-word filtering), so length normalization is measured in the same units
//! as term frequency.

pub mod document;
pub mod manifest;
pub mod parallel;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::BuildError;
use crate::types::{CorpusStats, DocumentRecord, PostingList, SearchIndex};

pub use document::*;
pub use manifest::*;
pub use parallel::*;

/// Accumulates documents and emits an immutable snapshot.
///
/// Document order is insertion order; posting lists are sorted by document
/// index because documents are merged one at a time, in order.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    documents: Vec<DocumentRecord>,
    vocabulary: HashMap<String, PostingList>,
    total_length: u64,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize and add one document.
    pub fn add_document(&mut self, doc: SourceDocument) -> &mut Self {
        let counts = count_terms(&doc);
        self.add_counted(doc, counts);
        self
    }

    /// Add a document whose terms were already counted (see `count_all`).
    pub fn add_counted(&mut self, doc: SourceDocument, counts: TermCounts) {
        let doc_index = self.documents.len() as u32;

        // Sorted so the vocabulary is filled in a reproducible order
        let mut terms: Vec<(String, u32)> = counts.counts.into_iter().collect();
        terms.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        for (term, tf) in terms {
            self.vocabulary.entry(term).or_default().push(doc_index, tf);
        }

        self.total_length += u64::from(counts.length);
        self.documents.push(doc.into_record(counts.length));
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Finish: compute corpus stats and hand back the snapshot.
    pub fn build(self) -> SearchIndex {
        let total_documents = self.documents.len();
        let average_document_length = if total_documents == 0 {
            0.0
        } else {
            self.total_length as f64 / total_documents as f64
        };

        let corpus_stats = CorpusStats {
            total_documents: total_documents as u32,
            average_document_length,
            vocabulary_size: self.vocabulary.len() as u32,
        };

        tracing::info!(
            target: "loomsearch::build",
            documents = total_documents,
            terms = self.vocabulary.len(),
            average_document_length,
            "Built index snapshot"
        );

        SearchIndex {
            documents: self.documents,
            vocabulary: self.vocabulary,
            corpus_stats,
            embeddings_blob: None,
        }
    }
}

/// Build a snapshot from documents, tokenizing in parallel when available.
pub fn build_index(docs: Vec<SourceDocument>) -> SearchIndex {
    let counts = count_all(&docs);
    let mut builder = IndexBuilder::new();
    for (doc, counts) in docs.into_iter().zip(counts) {
        builder.add_counted(doc, counts);
    }
    builder.build()
}

/// What `run_build` produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildSummary {
    pub documents: usize,
    pub terms: usize,
    pub average_document_length: f64,
}

/// Create a progress style for the loading bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Read `manifest.json` and its documents from `input_dir`, write the snapshot to `output`.
pub fn run_build(input_dir: &Path, output: &Path) -> Result<BuildSummary, BuildError> {
    let manifest_path = input_dir.join("manifest.json");
    let manifest_content = fs::read_to_string(&manifest_path).map_err(|source| BuildError::Read {
        path: manifest_path.clone(),
        source,
    })?;
    let manifest: InputManifest =
        serde_json::from_str(&manifest_content).map_err(|source| BuildError::Json {
            path: manifest_path.clone(),
            source,
        })?;

    if manifest.version != MANIFEST_VERSION {
        return Err(BuildError::UnsupportedVersion {
            found: manifest.version,
            expected: MANIFEST_VERSION,
        });
    }

    #[cfg(feature = "parallel")]
    let progress = {
        let pb = ProgressBar::new(manifest.documents.len() as u64);
        pb.set_style(create_progress_style());
        pb.set_prefix("Loading");
        pb
    };

    let docs = load_documents(
        input_dir,
        &manifest,
        #[cfg(feature = "parallel")]
        &progress,
    )?;

    #[cfg(feature = "parallel")]
    progress.finish_and_clear();

    if docs.is_empty() {
        tracing::warn!(
            target: "loomsearch::build",
            manifest = %manifest_path.display(),
            "Manifest lists no documents; writing an empty snapshot"
        );
    }

    let index = build_index(docs);
    index.save(output)?;

    Ok(BuildSummary {
        documents: index.documents.len(),
        terms: index.vocabulary.len(),
        average_document_length: index.corpus_stats.average_document_length,
    })
}
