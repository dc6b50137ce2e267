//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use loomsearch::{build_index, ScoredResult, SearchEngine, SearchIndex, SourceDocument};
use serde_json::json;

// Re-export canonical test utilities from loomsearch::testing
pub use loomsearch::testing::{
    index_from_postings, make_grouped_record, make_record, stats_for, three_doc_index,
};

// ============================================================================
// INDEX BUILDERS
// ============================================================================

/// Build a snapshot from (title, text) pairs. Paths are `/doc/{i}`.
pub fn build_test_index(docs: &[(&str, &str)]) -> SearchIndex {
    build_index(
        docs.iter()
            .enumerate()
            .map(|(i, (title, text))| SourceDocument::new(&format!("/doc/{}", i), title, text))
            .collect(),
    )
}

/// Engine over `build_test_index`.
pub fn engine_for(docs: &[(&str, &str)]) -> SearchEngine {
    SearchEngine::new(build_test_index(docs))
}

/// A small corpus about web languages, used by most search tests.
pub fn web_corpus() -> SearchEngine {
    engine_for(&[
        ("JavaScript Basics", "javascript variables functions closures javascript"),
        ("TypeScript Handbook", "typescript adds static types to javascript"),
        ("React Patterns", "react components hooks javascript rendering"),
        ("Rust Ownership", "rust ownership borrowing lifetimes"),
        ("Python Tricks", "python generators decorators comprehensions"),
    ])
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Paths of the results, in order.
pub fn paths(results: &[ScoredResult]) -> Vec<String> {
    results.iter().map(|r| r.path.clone()).collect()
}

/// Panics unless results are in descending score order.
pub fn assert_sorted_desc(results: &[ScoredResult]) {
    for pair in results.windows(2) {
        assert!(
            pair[0].combined_score >= pair[1].combined_score,
            "results out of order: {} ({}) before {} ({})",
            pair[0].path,
            pair[0].combined_score,
            pair[1].path,
            pair[1].combined_score
        );
    }
}

// ============================================================================
// BUILD FIXTURES
// ============================================================================

/// Write a build input directory: `manifest.json` plus one JSON file per document.
pub fn write_build_input(dir: &Path, docs: &[serde_json::Value]) {
    let mut filenames = Vec::new();
    for (i, doc) in docs.iter().enumerate() {
        let filename = format!("doc-{:03}.json", i);
        fs::write(dir.join(&filename), serde_json::to_vec_pretty(doc).unwrap()).unwrap();
        filenames.push(filename);
    }
    let manifest = json!({ "version": 1, "documents": filenames });
    fs::write(dir.join("manifest.json"), serde_json::to_vec_pretty(&manifest).unwrap()).unwrap();
}

/// A few documents in build-input form.
pub fn sample_build_docs() -> Vec<serde_json::Value> {
    vec![
        json!({
            "path": "/weaves/rust/ownership",
            "title": "Ownership",
            "summary": "Moves, borrows, lifetimes",
            "text": "every value in rust has exactly one owner",
            "weave": "rust",
            "loom": "fundamentals"
        }),
        json!({
            "path": "/weaves/rust/traits",
            "title": "Traits",
            "summary": "Shared behavior",
            "text": "traits describe shared behavior across rust types",
            "weave": "rust",
            "loom": "fundamentals",
            "readingMinutes": 7
        }),
        json!({
            "path": "/weaves/web/fetch",
            "title": "Fetching data",
            "text": "javascript fetch returns promises"
        }),
    ]
}
