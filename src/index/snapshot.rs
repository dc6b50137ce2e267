// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading and writing JSON snapshots.
//!
//! Loading does exactly two things: parse, and complain (in the log) if the
//! stored corpus stats don't match the documents. It never fixes anything up.
//! The engine already copes with inconsistent snapshots, and silently
//! "repairing" them would hide builder bugs.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::IndexError;
use crate::types::SearchIndex;

/// Relative tolerance when comparing stored and recomputed average lengths.
const AVG_LEN_TOLERANCE: f64 = 1e-6;

impl SearchIndex {
    pub fn from_json_str(json: &str) -> Result<Self, IndexError> {
        let index: SearchIndex = serde_json::from_str(json)?;
        index.log_loaded();
        Ok(index)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, IndexError> {
        let index: SearchIndex = serde_json::from_slice(bytes)?;
        index.log_loaded();
        Ok(index)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, IndexError> {
        let index: SearchIndex = serde_json::from_reader(reader)?;
        index.log_loaded();
        Ok(index)
    }

    /// Load a snapshot from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| IndexError::io(path, e))?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn to_json_writer<W: Write>(&self, writer: W) -> Result<(), IndexError> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    /// Write the snapshot to disk as compact JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), IndexError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| IndexError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.to_json_writer(&mut writer)?;
        writer.flush().map_err(|e| IndexError::io(path, e))?;

        tracing::info!(
            target: "loomsearch::index",
            path = %path.display(),
            documents = self.documents.len(),
            terms = self.vocabulary.len(),
            "Wrote index snapshot"
        );
        Ok(())
    }

    fn log_loaded(&self) {
        tracing::info!(
            target: "loomsearch::index",
            documents = self.documents.len(),
            terms = self.vocabulary.len(),
            "Loaded index snapshot"
        );

        let stats = self.corpus_stats;
        if stats.total_documents as usize != self.documents.len() {
            tracing::warn!(
                target: "loomsearch::index",
                stated = stats.total_documents,
                actual = self.documents.len(),
                "corpusStats.totalDocuments disagrees with documents"
            );
        }

        if let Some(actual) = self.mean_document_length() {
            let stated = stats.average_document_length;
            if (stated - actual).abs() > AVG_LEN_TOLERANCE * actual.max(1.0) {
                tracing::warn!(
                    target: "loomsearch::index",
                    stated,
                    actual,
                    "corpusStats.averageDocumentLength disagrees with documents"
                );
            }
        }
    }

    /// Mean `document_length` over the documents actually present.
    pub fn mean_document_length(&self) -> Option<f64> {
        if self.documents.is_empty() {
            return None;
        }
        let total: u64 = self
            .documents
            .iter()
            .map(|d| u64::from(d.document_length))
            .sum();
        Some(total as f64 / self.documents.len() as f64)
    }
}
