//! Edge cases: degenerate queries, degenerate corpora, malformed postings.

use super::common::{index_from_postings, make_record, paths, three_doc_index, web_corpus};
use loomsearch::{CorpusStats, PostingList, SearchEngine, SearchIndex, SearchOptions};

// ============================================================================
// DEGENERATE QUERIES
// ============================================================================

#[test]
fn test_empty_and_whitespace_queries() {
    let engine = web_corpus();
    assert!(engine.search("").is_empty());
    assert!(engine.search("   ").is_empty());
    assert!(engine.search("\t\n\r").is_empty());
}

#[test]
fn test_stop_words_only() {
    let engine = web_corpus();
    assert!(engine.search("the a is in").is_empty());
    assert!(engine.search("which would they").is_empty());
}

#[test]
fn test_short_tokens_only() {
    let engine = web_corpus();
    assert!(engine.search("a b c").is_empty());
    assert!(engine.search("js ts go").is_empty());
}

#[test]
fn test_unknown_terms() {
    let engine = web_corpus();
    assert!(engine.search("haskell erlang").is_empty());
}

#[test]
fn test_punctuation_only() {
    let engine = web_corpus();
    assert!(engine.search("!!! ??? ...").is_empty());
    assert!(engine.search("+-*/ <> {}").is_empty());
}

#[test]
fn test_adversarial_long_input() {
    let engine = web_corpus();
    let noise = "!@#$%^&*()".repeat(10_000);
    assert!(engine.search(&noise).is_empty());

    let repeated = "javascript ".repeat(5_000);
    let results = engine.search(&repeated);
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.lexical_score.is_finite()));
}

#[test]
fn test_unicode_heavy_input() {
    let engine = web_corpus();
    assert!(engine.search("日本語 🦀🦀🦀 ñandú Ωμέγα").is_empty());
    assert!(engine.search("\u{200b}\u{feff}\u{0301}").is_empty());
}

#[test]
fn test_zero_limit() {
    let engine = web_corpus();
    assert!(engine
        .search_with("javascript", &SearchOptions::with_limit(0))
        .is_empty());
}

// ============================================================================
// DEGENERATE CORPORA
// ============================================================================

#[test]
fn test_empty_index() {
    let engine = SearchEngine::new(SearchIndex::default());
    assert!(engine.search("javascript").is_empty());
}

#[test]
fn test_empty_vocabulary() {
    let index = index_from_postings(vec![make_record(0, "Lonely", 4)], vec![]);
    assert!(SearchEngine::new(index).search("lonely").is_empty());
}

#[test]
fn test_zero_average_length() {
    let index = index_from_postings(
        vec![make_record(0, "Empty", 0), make_record(1, "Also empty", 0)],
        vec![("ghost", PostingList::from_pairs([(0, 1), (1, 3)]))],
    );
    assert_eq!(index.corpus_stats.average_document_length, 0.0);

    let results = SearchEngine::new(index).search("ghost");
    assert_eq!(results.len(), 2);
    for result in &results {
        assert!(result.lexical_score.is_finite());
        assert!(result.lexical_score > 0.0);
    }
    assert_eq!(results[0].document_index, 1);
}

#[test]
fn test_zero_length_document_among_others() {
    let index = index_from_postings(
        vec![make_record(0, "Empty", 0), make_record(1, "Full", 20)],
        vec![("rust", PostingList::from_pairs([(0, 1), (1, 1)]))],
    );
    let results = SearchEngine::new(index).search("rust");
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.lexical_score.is_finite()));
    // Shorter document gets the smaller length penalty
    assert_eq!(results[0].document_index, 0);
}

#[test]
fn test_non_finite_average_length() {
    let mut index = three_doc_index();
    index.corpus_stats.average_document_length = f64::NAN;
    let results = SearchEngine::new(index).search("javascript");
    assert_eq!(results.len(), 1);
    assert!(results[0].lexical_score.is_finite());
}

#[test]
fn test_single_document_corpus() {
    let index = index_from_postings(
        vec![make_record(0, "Solitary", 5)],
        vec![("solitary", PostingList::from_pairs([(0, 1)]))],
    );
    let results = SearchEngine::new(index).search("solitary");
    assert_eq!(results.len(), 1);
    // N = df = 1 still yields a positive idf of ln(4/3)
    assert!(results[0].lexical_score > 0.0);
}

// ============================================================================
// MALFORMED POSTINGS
// ============================================================================

#[test]
fn test_out_of_range_postings_are_skipped() {
    let index = index_from_postings(
        vec![make_record(0, "Real", 10)],
        vec![("rust", PostingList::from_pairs([(0, 1), (7, 2), (u32::MAX, 9)]))],
    );
    let results = SearchEngine::new(index).search("rust");
    assert_eq!(paths(&results), vec!["/doc/0"]);
}

#[test]
fn test_zero_frequency_postings_are_skipped() {
    let index = index_from_postings(
        vec![make_record(0, "Zero", 10), make_record(1, "One", 10)],
        vec![("rust", PostingList::from_pairs([(0, 0), (1, 1)]))],
    );
    let results = SearchEngine::new(index).search("rust");
    assert_eq!(paths(&results), vec!["/doc/1"]);
}

#[test]
fn test_inconsistent_stats_never_panic() {
    let mut index = three_doc_index();
    index.corpus_stats = CorpusStats {
        total_documents: 0,
        average_document_length: -4.0,
        vocabulary_size: 0,
    };
    let results = SearchEngine::new(index).search("javascript typescript react");
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.lexical_score.is_finite()));
}
