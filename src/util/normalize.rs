// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding, punctuation stripping, and tokenization.
//!
//! Punctuation is removed, not replaced with a space. `"javascript!"` and
//! `"javascript"` become the same token, and `"node.js"` becomes `"nodejs"`.
//! That matches what the offline builder does, which is the only thing that
//! really matters here.

use super::stop_words::is_stop_word;

/// Tokens this short (in characters) are never searchable.
pub const MAX_SHORT_TOKEN_CHARS: usize = 2;

/// Lowercase and drop everything that isn't alphanumeric or whitespace.
///
/// ```ignore
/// assert_eq!(normalize("Hello, World!"), "hello world");
/// assert_eq!(normalize("C++ & Rust"), "c  rust");
/// ```
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Is this token worth looking up?
///
/// Drops anything of two characters or fewer, then anything on the stop list.
#[inline]
pub fn is_searchable(token: &str) -> bool {
    token.chars().nth(MAX_SHORT_TOKEN_CHARS).is_some() && !is_stop_word(token)
}

/// Normalize, split on whitespace runs, and keep the searchable tokens.
///
/// Order is preserved and duplicates are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|token| is_searchable(token))
        .map(str::to_string)
        .collect()
}
