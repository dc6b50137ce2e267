//! Query normalizer properties.
//!
//! - Case and punctuation never change the term sequence
//! - Every emitted term is searchable (long enough, not a stop word)
//! - Normalizing is idempotent on the emitted terms

use loomsearch::util::normalize::is_searchable;
use loomsearch::util::stop_words::stop_words;
use loomsearch::{normalize, parse_query};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,10}").unwrap()
}

fn punctuation_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[!?.,;:'\"()*&^%$#@+=-]{0,3}").unwrap()
}

fn query_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Uppercasing the query never changes the terms.
    #[test]
    fn prop_case_insensitive(words in query_strategy()) {
        let query = words.join(" ");
        prop_assert_eq!(parse_query(&query), parse_query(&query.to_uppercase()));
    }

    /// Punctuation glued to words is removed without splitting them.
    #[test]
    fn prop_punctuation_insensitive(
        words in query_strategy(),
        marks in prop::collection::vec(punctuation_strategy(), 8),
    ) {
        let plain = words.join(" ");
        let decorated: Vec<String> = words
            .iter()
            .zip(&marks)
            .map(|(w, m)| format!("{m}{w}{m}"))
            .collect();
        prop_assert_eq!(parse_query(&plain), parse_query(&decorated.join(" ")));
    }

    /// Every term that survives is searchable and already normalized.
    #[test]
    fn prop_terms_are_searchable(query in "\\PC{0,80}") {
        for term in parse_query(&query) {
            prop_assert!(is_searchable(&term), "{:?} should have been dropped", term);
            prop_assert_eq!(normalize(&term), term.clone());
            prop_assert!(!term.chars().any(char::is_whitespace));
        }
    }

    /// Parsing the joined terms again yields the same terms.
    #[test]
    fn prop_parse_is_idempotent(query in "\\PC{0,80}") {
        let terms = parse_query(&query);
        prop_assert_eq!(parse_query(&terms.join(" ")), terms);
    }

    /// A query built only from stop words and short tokens parses to nothing.
    #[test]
    fn prop_filler_only_queries_are_empty(
        picks in prop::collection::vec(0usize..1000, 0..12),
        short in prop::collection::vec("[a-z]{1,2}", 0..6),
    ) {
        let list = stop_words();
        let mut words: Vec<String> = picks.iter().map(|i| list[i % list.len()].to_string()).collect();
        words.extend(short);
        prop_assert!(parse_query(&words.join(" ")).is_empty());
    }
}

#[test]
fn test_known_examples() {
    assert_eq!(parse_query("JavaScript!"), vec!["javascript"]);
    assert_eq!(parse_query("\"javascript\""), vec!["javascript"]);
    assert_eq!(parse_query("node.js and deno"), vec!["nodejs", "deno"]);
    assert_eq!(parse_query("the a is in"), Vec::<String>::new());
    assert_eq!(parse_query("rust rust"), vec!["rust", "rust"]);
}
