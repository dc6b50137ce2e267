// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking: Okapi BM25.
//!
//! ```text
//! idf        = ln( (N - df + 0.5) / (df + 0.5) + 1 )
//! lengthNorm = (1 - b) + b * (dl / avgdl)        // avgdl == 0 → 1
//! termScore  = idf * tf * (k1 + 1) / (tf + k1 * lengthNorm)
//! ```
//!
//! # Key invariant: positive contributions
//!
//! For a consistent snapshot (`df ≤ N`) the argument of `ln` is at least
//! `1 + 0.5 / (N + 0.5)`, so `idf` is strictly positive even for a term that
//! appears in every document. We don't clamp. A snapshot claiming `df > N`
//! can produce a negative `idf`, and we let it, because that's a builder bug
//! and `verify_index` is where it should surface.
//!
//! # Constants
//!
//! | Param | Default | What it does |
//! |-------|---------|--------------|
//! | `k1`  | 1.5     | Term-frequency saturation. Higher = more reward for repeats |
//! | `b`   | 0.75    | Length normalization strength. 0 = off, 1 = full |

use serde::{Deserialize, Serialize};

/// Default term-frequency saturation.
pub const DEFAULT_K1: f64 = 1.5;

/// Default length normalization strength.
pub const DEFAULT_B: f64 = 0.75;

/// BM25 tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    pub k1: f64,
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self {
            k1: DEFAULT_K1,
            b: DEFAULT_B,
        }
    }
}

impl Bm25Params {
    pub fn new(k1: f64, b: f64) -> Self {
        Self { k1, b }
    }

    /// Replace out-of-range values with the defaults.
    ///
    /// `k1` must be finite and non-negative; `b` must lie in `[0, 1]`.
    /// Anything else would make scores NaN or negative, so it's swapped for
    /// the default with a warning rather than rejected.
    pub fn sanitized(self) -> Self {
        let k1 = if self.k1.is_finite() && self.k1 >= 0.0 {
            self.k1
        } else {
            tracing::warn!(
                target: "loomsearch::search",
                k1 = self.k1,
                fallback = DEFAULT_K1,
                "k1 out of range, using default"
            );
            DEFAULT_K1
        };
        let b = if (0.0..=1.0).contains(&self.b) {
            self.b
        } else {
            tracing::warn!(
                target: "loomsearch::search",
                b = self.b,
                fallback = DEFAULT_B,
                "b out of range, using default"
            );
            DEFAULT_B
        };
        Self { k1, b }
    }
}

/// Inverse document frequency with BM25's +0.5 smoothing.
///
/// `total_docs` is N, `doc_freq` is the length of the term's posting list.
#[inline]
pub fn idf(total_docs: f64, doc_freq: f64) -> f64 {
    ((total_docs - doc_freq + 0.5) / (doc_freq + 0.5) + 1.0).ln()
}

/// Document length relative to the corpus average, blended by `b`.
///
/// A degenerate corpus (average length zero, negative, or non-finite) gets a
/// neutral `1.0` instead of a division by zero.
#[inline]
pub fn length_norm(doc_len: f64, avg_doc_len: f64, b: f64) -> f64 {
    if avg_doc_len > 0.0 && avg_doc_len.is_finite() {
        (1.0 - b) + b * (doc_len / avg_doc_len)
    } else {
        1.0
    }
}

/// Saturated term-frequency component, before the `idf` weight.
#[inline]
pub fn tf_component(tf: f64, k1: f64, norm: f64) -> f64 {
    let denominator = tf + k1 * norm;
    if denominator > 0.0 {
        tf * (k1 + 1.0) / denominator
    } else {
        0.0
    }
}

/// Corpus-level numbers one term's contributions share.
///
/// Computed once per query term, then reused for every posting in its list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermStats {
    pub idf: f64,
    pub avg_doc_len: f64,
}

impl TermStats {
    pub fn new(total_docs: u32, doc_freq: usize, avg_doc_len: f64) -> Self {
        Self {
            idf: idf(f64::from(total_docs), doc_freq as f64),
            avg_doc_len,
        }
    }
}

/// One term's contribution to one document's score.
#[inline]
pub fn term_score(params: &Bm25Params, stats: &TermStats, tf: u32, doc_len: u32) -> f64 {
    let norm = length_norm(f64::from(doc_len), stats.avg_doc_len, params.b);
    stats.idf * tf_component(f64::from(tf), params.k1, norm)
}
