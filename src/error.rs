// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for loading and writing index snapshots.
//!
//! Searching never fails, so there's nothing here for it. Everything that can
//! go wrong happens before a `SearchEngine` exists.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading or writing a snapshot.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Snapshot file couldn't be opened, read, or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Snapshot bytes aren't a valid index document
    #[error("Invalid index snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors from building a snapshot out of a document directory.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Manifest or document file couldn't be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Manifest or document file isn't valid JSON of the expected shape
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// Manifest declares a version this builder doesn't understand
    #[error("Unsupported manifest version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version in the manifest
        found: u32,
        /// Version this builder writes
        expected: u32,
    },

    /// Writing the finished snapshot failed
    #[error(transparent)]
    Write(#[from] IndexError),
}

impl IndexError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::Io {
            path: path.into(),
            source,
        }
    }
}
