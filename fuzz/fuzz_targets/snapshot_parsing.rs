// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snapshot parsing under adversarial input.
//!
//! A crafted snapshot should produce an error or a searchable index, never a
//! crash. Anything that parses is then verified and searched: out-of-range
//! postings, zero frequencies, NaN averages, and lying corpus stats must all
//! be survivable.

#![no_main]

use libfuzzer_sys::fuzz_target;
use loomsearch::{verify_index, SearchEngine, SearchIndex, SearchOptions};

fuzz_target!(|data: &[u8]| {
    // Malformed input is an Err, not a panic
    let Ok(index) = SearchIndex::from_json_slice(data) else {
        return;
    };

    // INVARIANT 1: verification terminates and counts what's there
    let report = verify_index(&index);
    assert_eq!(report.documents, index.documents.len());
    assert_eq!(report.terms, index.vocabulary.len());

    // INVARIANT 2: every vocabulary term can be searched without panicking
    let doc_count = index.documents.len();
    let terms: Vec<String> = index.vocabulary.keys().take(16).cloned().collect();
    let engine = SearchEngine::new(index);
    let options = SearchOptions::with_limit(50);

    let results = engine.search_terms(&terms, &options);
    assert!(results.len() <= 50);
    for result in &results {
        // INVARIANT 3: malformed postings are skipped, never projected
        assert!(result.document_index < doc_count);
    }

    // INVARIANT 4: a clean snapshot gives finite scores
    if report.is_clean() {
        let avg = engine.index().corpus_stats.average_document_length;
        if avg.is_finite() {
            for result in &results {
                assert!(result.lexical_score.is_finite());
            }
        }
    }
});
