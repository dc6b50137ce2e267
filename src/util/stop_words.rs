// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The closed English stop-word list.
//!
//! Articles, prepositions, pronouns, auxiliaries, conjunctions, and a handful
//! of filler adverbs. Two-letter entries are redundant with the short-token
//! filter but stay listed so the set reads as a complete list on its own.
//!
//! Changing this list changes what the index builder emits. Rebuild snapshots
//! after editing it.

use std::collections::HashSet;
use std::sync::LazyLock;

const STOP_WORD_LIST: &[&str] = &[
    // Articles and determiners
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either",
    "neither", "some", "any", "all", "both", "few", "more", "most", "other", "such",
    "own", "same", "another",
    // Prepositions
    "about", "above", "across", "after", "against", "along", "among", "around", "at",
    "before", "behind", "below", "beneath", "beside", "between", "beyond", "but", "by",
    "down", "during", "except", "for", "from", "in", "inside", "into", "near", "of",
    "off", "on", "onto", "out", "outside", "over", "past", "since", "through",
    "throughout", "till", "to", "toward", "towards", "under", "until", "up", "upon",
    "via", "with", "within", "without",
    // Pronouns
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you",
    "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she",
    "her", "hers", "herself", "it", "its", "itself", "they", "them", "their", "theirs",
    "themselves", "what", "which", "who", "whom", "whose",
    // Auxiliary and modal verbs
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "will", "would", "shall", "should", "can",
    "could", "may", "might", "must", "ought",
    // Conjunctions and connectives
    "and", "or", "nor", "so", "yet", "if", "then", "than", "because", "while",
    "although", "though", "unless", "whether", "as", "when", "where", "why", "how",
    // Adverbs and fillers
    "not", "no", "only", "very", "too", "just", "also", "again", "further", "once",
    "here", "there", "now", "ever", "never", "always",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

/// Check if a (normalized, lowercase) word is a stop word.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// The full list, for tooling that wants to display or export it.
pub fn stop_words() -> &'static [&'static str] {
    STOP_WORD_LIST
}
