// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the search API to verify it never panics,
//! never returns more than `limit` results, and always returns them in ranked
//! order. Emoji, RTL text, null bytes, and combining marks included.

#![no_main]

use libfuzzer_sys::fuzz_target;
use loomsearch::{build_index, SearchEngine, SearchOptions, SourceDocument};
use std::collections::HashSet;
use std::sync::OnceLock;

fn engine() -> &'static SearchEngine {
    static ENGINE: OnceLock<SearchEngine> = OnceLock::new();
    ENGINE.get_or_init(|| {
        let docs = vec![
            SourceDocument::new("/rust", "Rust Ownership", "ownership borrowing lifetimes rust"),
            SourceDocument::new("/js", "JavaScript", "javascript promises async await"),
            SourceDocument::new("/ts", "TypeScript", "typescript generics javascript types"),
            SourceDocument::new("/i18n", "Ünïcödé Tëxt", "日本語 テキスト ñandú Ωμέγα café"),
            SourceDocument::new("/empty", "", ""),
        ];
        SearchEngine::new(build_index(docs))
    })
}

fuzz_target!(|query: &[u8]| {
    let engine = engine();

    let query_str = String::from_utf8_lossy(query);
    // Cap query length (in chars) to avoid timeouts
    let query_str: String = query_str.chars().take(200).collect();

    // INVARIANT 1: search() never panics
    let options = SearchOptions::with_limit(3).explained();
    let results = engine.search_with(&query_str, &options);

    // INVARIANT 2: Results are bounded by limit
    assert!(results.len() <= 3, "Got {} results, expected at most 3", results.len());

    let doc_count = engine.index().documents.len();
    let mut seen = HashSet::new();
    for result in &results {
        // INVARIANT 3: Every result points at a real document
        assert!(result.document_index < doc_count);
        // INVARIANT 4: No duplicates
        assert!(seen.insert(result.document_index), "duplicate {}", result.document_index);
        // INVARIANT 5: Scores are finite and the two fields agree
        assert!(result.lexical_score.is_finite());
        assert_eq!(result.lexical_score, result.combined_score);
        // INVARIANT 6: Explain mode names at least one term
        assert!(!result.matched_terms.is_empty());
    }

    // INVARIANT 7: Descending score, ties in document order
    for pair in results.windows(2) {
        assert!(
            pair[0].combined_score > pair[1].combined_score
                || (pair[0].combined_score == pair[1].combined_score
                    && pair[0].document_index < pair[1].document_index),
            "results out of order"
        );
    }

    // INVARIANT 8: Deterministic
    assert_eq!(results, engine.search_with(&query_str, &options));
});
