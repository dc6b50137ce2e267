//! End-to-end tests for the build workflow.

use super::common::{sample_build_docs, write_build_input};
use loomsearch::build::run_build;
use loomsearch::{verify_index, BuildError, SearchEngine, SearchIndex};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_run_build_e2e_basic() {
    let input = TempDir::new().unwrap();
    write_build_input(input.path(), &sample_build_docs());
    let output = input.path().join("index.json");

    let summary = run_build(input.path(), &output).unwrap();
    assert_eq!(summary.documents, 3);
    assert!(summary.terms > 0);
    assert!(output.exists(), "index.json should be created");

    let index = SearchIndex::load(&output).unwrap();
    assert_eq!(index.documents.len(), 3);
    assert_eq!(index.vocabulary.len(), summary.terms);
    assert!(verify_index(&index).is_clean());
}

#[test]
fn test_run_build_preserves_manifest_order_and_fields() {
    let input = TempDir::new().unwrap();
    write_build_input(input.path(), &sample_build_docs());
    let output = input.path().join("index.json");
    run_build(input.path(), &output).unwrap();

    let index = SearchIndex::load(&output).unwrap();
    let paths: Vec<&str> = index.documents.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["/weaves/rust/ownership", "/weaves/rust/traits", "/weaves/web/fetch"]
    );
    assert_eq!(index.documents[1].loom.as_deref(), Some("fundamentals"));
    assert_eq!(index.documents[1].extra["readingMinutes"], 7);
    assert!(!index.documents[1].extra.contains_key("text"));
}

#[test]
fn test_build_then_search() {
    let input = TempDir::new().unwrap();
    write_build_input(input.path(), &sample_build_docs());
    let output = input.path().join("index.json");
    run_build(input.path(), &output).unwrap();

    let engine = SearchEngine::new(SearchIndex::load(&output).unwrap());

    let results = engine.search("Rust");
    let paths: Vec<&str> = results.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths.len(), 2);
    assert!(paths.contains(&"/weaves/rust/ownership"));
    assert!(paths.contains(&"/weaves/rust/traits"));

    let results = engine.search("promises!");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].path, "/weaves/web/fetch");
    assert_eq!(results[0].weave, None);
}

#[test]
fn test_run_build_missing_document_fails() {
    let input = TempDir::new().unwrap();
    fs::write(
        input.path().join("manifest.json"),
        r#"{"version": 1, "documents": ["ghost.json"]}"#,
    )
    .unwrap();

    let err = run_build(input.path(), &input.path().join("index.json")).unwrap_err();
    match err {
        BuildError::Read { path, .. } => assert!(path.ends_with("ghost.json")),
        other => panic!("expected Read error, got {:?}", other),
    }
}

#[test]
fn test_run_build_empty_manifest_writes_empty_index() {
    let input = TempDir::new().unwrap();
    write_build_input(input.path(), &[]);
    let output = input.path().join("index.json");

    let summary = run_build(input.path(), &output).unwrap();
    assert_eq!(summary.documents, 0);

    let index = SearchIndex::load(&output).unwrap();
    assert!(index.documents.is_empty());
    assert!(SearchEngine::new(index).search("anything").is_empty());
}

#[test]
fn test_run_build_unwritable_output_fails() {
    let input = TempDir::new().unwrap();
    write_build_input(input.path(), &sample_build_docs());
    let output = input.path().join("missing-dir").join("index.json");

    let err = run_build(input.path(), &output).unwrap_err();
    assert!(matches!(err, BuildError::Write(_)), "{:?}", err);
}
