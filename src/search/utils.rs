// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing.
//!
//! Lowercase, strip punctuation, split, drop short tokens and stop words. The
//! same pipeline the index builder runs over document text, which is the
//! whole point.

use crate::util::normalize::tokenize;

/// Parse a query string into the terms that will be looked up.
///
/// Order is preserved and repeats are kept, so `"rust rust"` weighs rust twice.
///
/// # Example
///
/// ```ignore
/// let terms = parse_query("The Rust Book!");
/// assert_eq!(terms, vec!["rust", "book"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    tokenize(query)
}
