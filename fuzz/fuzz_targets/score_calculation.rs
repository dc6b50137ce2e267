// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for BM25 score calculation.
//!
//! Raw parameters must always sanitize into range. Within realistic tuning
//! (k1 up to ~65, any b in [0, 1], average length in centi-tokens) every
//! combination of corpus numbers must give a finite score, and a positive one
//! whenever the term occurs (tf > 0) in a consistent corpus (1 <= df <= N).

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use loomsearch::scoring::{term_score, Bm25Params, TermStats};

#[derive(Debug, Arbitrary)]
struct Input {
    total_docs: u32,
    doc_freq: u32,
    tf: u32,
    doc_len: u32,
    avg_doc_len_centi: u32,
    k1_milli: u16,
    b_raw: u16,
    raw_k1: f64,
    raw_b: f64,
}

fuzz_target!(|input: Input| {
    // INVARIANT 1: sanitized parameters are in range
    let raw = Bm25Params::new(input.raw_k1, input.raw_b).sanitized();
    assert!(raw.k1.is_finite() && raw.k1 >= 0.0);
    assert!((0.0..=1.0).contains(&raw.b));

    let params = Bm25Params::new(
        f64::from(input.k1_milli) / 1000.0,
        f64::from(input.b_raw) / f64::from(u16::MAX),
    )
    .sanitized();
    let avg_doc_len = f64::from(input.avg_doc_len_centi) / 100.0;
    let stats = TermStats::new(input.total_docs, input.doc_freq as usize, avg_doc_len);
    let score = term_score(&params, &stats, input.tf, input.doc_len);

    // INVARIANT 2: always finite
    assert!(score.is_finite(), "non-finite score for {:?}", input);

    // INVARIANT 3: deterministic
    assert_eq!(score, term_score(&params, &stats, input.tf, input.doc_len));

    // INVARIANT 4: positive for consistent corpora
    let consistent = input.doc_freq >= 1 && input.doc_freq <= input.total_docs;
    if consistent && input.tf > 0 {
        assert!(score > 0.0, "non-positive score for {:?}", input);
    }
});
