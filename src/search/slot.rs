// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hot-swapping snapshots without stopping searches.
//!
//! When a new index arrives from a background rebuild, callers want to start
//! using it without ever letting a query observe a half-written index. The
//! trick is that we never write to an index at all: a slot holds an
//! `Arc<SearchEngine>`, readers clone the `Arc` (one short read lock), and a
//! swap replaces the pointer (one short write lock). A query that grabbed the
//! old engine keeps running against the old snapshot until it's done, and the
//! old snapshot is freed when the last such query drops its `Arc`.
//!
//! # Usage
//!
//! ```ignore
//! let slot = EngineSlot::new(SearchEngine::new(initial_index));
//!
//! // Request thread
//! let results = slot.current().search("rust");
//!
//! // Rebuild thread
//! slot.replace_index(SearchIndex::load("index.json")?);
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

use crate::types::SearchIndex;

use super::engine::SearchEngine;

/// A swappable handle to the live search engine.
#[derive(Debug)]
pub struct EngineSlot {
    current: RwLock<Arc<SearchEngine>>,
}

impl EngineSlot {
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            current: RwLock::new(Arc::new(engine)),
        }
    }

    /// The engine to run the next search on.
    ///
    /// Hold on to the returned `Arc` for the duration of a query; a concurrent
    /// swap won't affect it.
    pub fn current(&self) -> Arc<SearchEngine> {
        Arc::clone(&self.current.read())
    }

    /// Install a new engine. Returns the one it replaced.
    pub fn swap(&self, engine: SearchEngine) -> Arc<SearchEngine> {
        let next = Arc::new(engine);
        let previous = std::mem::replace(&mut *self.current.write(), next);

        tracing::info!(
            target: "loomsearch::search",
            documents = previous.index().document_count(),
            "Replaced search engine snapshot"
        );
        previous
    }

    /// Install a new snapshot, keeping the current BM25 parameters.
    pub fn replace_index(&self, index: impl Into<Arc<SearchIndex>>) -> Arc<SearchEngine> {
        let params = self.current.read().params();
        self.swap(SearchEngine::with_params(index, params))
    }
}
