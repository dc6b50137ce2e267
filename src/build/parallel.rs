// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel document loading and tokenization.
//!
//! The expensive parts of building a snapshot are (1) reading JSON files from
//! disk and (2) tokenizing every document. Both are embarrassingly parallel.
//! Rayon makes this trivial: `par_iter()` over files, `par_iter()` over
//! documents. Merging into the vocabulary stays sequential so posting lists
//! come out in document order no matter how the threads were scheduled.
//!
//! Without the `parallel` feature the same functions run on one thread.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::BuildError;
use crate::util::normalize::tokenize;

use super::{InputManifest, SourceDocument};

/// Term frequencies for one document, plus its indexed token count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermCounts {
    pub counts: HashMap<String, u32>,
    pub length: u32,
}

/// Tokenize one document's indexed text and count terms.
pub fn count_terms(doc: &SourceDocument) -> TermCounts {
    let tokens = tokenize(&doc.indexed_text());
    let length = u32::try_from(tokens.len()).unwrap_or(u32::MAX);

    let mut counts: HashMap<String, u32> = HashMap::new();
    for token in tokens {
        let tf = counts.entry(token).or_insert(0);
        *tf = tf.saturating_add(1);
    }

    TermCounts { counts, length }
}

/// Count terms for every document, in parallel when available.
pub fn count_all(docs: &[SourceDocument]) -> Vec<TermCounts> {
    #[cfg(feature = "parallel")]
    {
        docs.par_iter().map(count_terms).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        docs.iter().map(count_terms).collect()
    }
}

fn load_document(input_dir: &Path, filename: &str) -> Result<SourceDocument, BuildError> {
    let path = input_dir.join(filename);
    let content = fs::read_to_string(&path).map_err(|source| BuildError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str::<SourceDocument>(&content)
        .map_err(|source| BuildError::Json { path, source })
}

/// Load all documents listed in the manifest, preserving manifest order.
///
/// Fails on the first unreadable or malformed file. A snapshot missing
/// documents would shift every index after the gap, so there's no skipping.
pub fn load_documents(
    input_dir: &Path,
    manifest: &InputManifest,
    #[cfg(feature = "parallel")] progress: &ProgressBar,
) -> Result<Vec<SourceDocument>, BuildError> {
    #[cfg(feature = "parallel")]
    {
        manifest
            .documents
            .par_iter()
            .map(|filename| {
                let doc = load_document(input_dir, filename);
                progress.inc(1);
                doc
            })
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        manifest
            .documents
            .iter()
            .map(|filename| load_document(input_dir, filename))
            .collect()
    }
}
