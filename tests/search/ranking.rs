//! Ranking tests: ordering, tiebreaks, limits, and parameter effects.

use super::common::{assert_sorted_desc, index_from_postings, make_record, paths, web_corpus};
use loomsearch::{Bm25Params, PostingList, SearchEngine, SearchOptions};

// ============================================================================
// ORDERING
// ============================================================================

#[test]
fn test_higher_term_frequency_ranks_first() {
    let index = index_from_postings(
        vec![make_record(0, "Low", 10), make_record(1, "High", 10)],
        vec![("rust", PostingList::from_pairs([(0, 1), (1, 4)]))],
    );
    let results = SearchEngine::new(index).search("rust");
    assert_eq!(paths(&results), vec!["/doc/1", "/doc/0"]);
    assert!(results[0].lexical_score > results[1].lexical_score);
}

#[test]
fn test_shorter_document_ranks_first_at_equal_frequency() {
    let index = index_from_postings(
        vec![make_record(0, "Long", 40), make_record(1, "Short", 5)],
        vec![("rust", PostingList::from_pairs([(0, 2), (1, 2)]))],
    );
    let results = SearchEngine::new(index).search("rust");
    assert_eq!(paths(&results), vec!["/doc/1", "/doc/0"]);
}

#[test]
fn test_b_zero_disables_length_normalization() {
    let index = index_from_postings(
        vec![make_record(0, "Long", 40), make_record(1, "Short", 5)],
        vec![("rust", PostingList::from_pairs([(0, 2), (1, 2)]))],
    );
    let engine = SearchEngine::with_params(index, Bm25Params::new(1.5, 0.0));
    let results = engine.search("rust");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].lexical_score, results[1].lexical_score);
    // Equal scores fall back to document order
    assert_eq!(paths(&results), vec!["/doc/0", "/doc/1"]);
}

#[test]
fn test_ties_keep_document_order() {
    let engine = web_corpus();
    let results = engine.search("javascript");
    // Documents 1 and 2 both mention javascript once in 7 tokens
    assert_eq!(results[1].lexical_score, results[2].lexical_score);
    assert!(results[1].document_index < results[2].document_index);
}

#[test]
fn test_matching_more_terms_ranks_higher() {
    let index = index_from_postings(
        vec![make_record(0, "One", 10), make_record(1, "Both", 10)],
        vec![
            ("rust", PostingList::from_pairs([(0, 1), (1, 1)])),
            ("async", PostingList::from_pairs([(1, 1)])),
        ],
    );
    let results = SearchEngine::new(index).search("rust async");
    assert_eq!(paths(&results), vec!["/doc/1", "/doc/0"]);
    assert!(results[0].lexical_score > results[1].lexical_score);
}

#[test]
fn test_results_sorted_descending() {
    let engine = web_corpus();
    assert_sorted_desc(&engine.search("javascript typescript react hooks types"));
}

// ============================================================================
// LIMITS
// ============================================================================

#[test]
fn test_limit_truncates() {
    let engine = web_corpus();
    let results = engine.search_with("javascript", &SearchOptions::with_limit(2));
    assert_eq!(paths(&results), vec!["/doc/0", "/doc/1"]);
}

#[test]
fn test_limit_larger_than_matches_returns_all() {
    let engine = web_corpus();
    let results = engine.search_with("javascript", &SearchOptions::with_limit(100));
    assert_eq!(results.len(), 3);
}

#[test]
fn test_default_limit_is_twenty() {
    let documents: Vec<_> = (0..30).map(|i| make_record(i, "Doc", 10)).collect();
    let postings = PostingList::from_pairs((0..30).map(|i| (i, 1)));
    let index = index_from_postings(documents, vec![("common", postings)]);

    let results = SearchEngine::new(index).search("common");
    assert_eq!(results.len(), loomsearch::DEFAULT_LIMIT);
    // All tied, so the first twenty documents in order
    let indices: Vec<usize> = results.iter().map(|r| r.document_index).collect();
    assert_eq!(indices, (0..20).collect::<Vec<_>>());
}
