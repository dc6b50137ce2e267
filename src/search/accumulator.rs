// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-document score accumulation across query terms.
//!
//! Scores are keyed by document, not by term. A repeated query term simply
//! walks its posting list twice and adds twice, which is what we want.

use std::collections::HashMap;

use crate::scoring::ranking::RankedDoc;
use crate::types::TermContribution;

pub(crate) struct ScoreAccumulator {
    scores: HashMap<u32, f64>,
    /// Only allocated in explain mode
    contributions: Option<HashMap<u32, Vec<TermContribution>>>,
}

impl ScoreAccumulator {
    pub fn new(explain: bool) -> Self {
        Self {
            scores: HashMap::new(),
            contributions: explain.then(HashMap::new),
        }
    }

    pub fn add(&mut self, doc_index: u32, term: &str, score: f64) {
        *self.scores.entry(doc_index).or_insert(0.0) += score;

        if let Some(contributions) = self.contributions.as_mut() {
            contributions
                .entry(doc_index)
                .or_default()
                .push(TermContribution {
                    term: term.to_string(),
                    score,
                });
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Split into the unsorted candidates and (in explain mode) their breakdowns.
    pub fn finish(self) -> (Vec<RankedDoc>, HashMap<u32, Vec<TermContribution>>) {
        let docs = self
            .scores
            .into_iter()
            .map(|(doc_index, score)| RankedDoc { doc_index, score })
            .collect();
        (docs, self.contributions.unwrap_or_default())
    }
}
