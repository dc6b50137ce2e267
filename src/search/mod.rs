// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! Everything culminates here. The snapshot is loaded, the BM25 math lives in
//! `scoring`, and this module strings it together: parse the query, walk the
//! posting lists, accumulate, rank, project.

mod accumulator;
pub mod engine;
pub mod project;
pub mod slot;
pub mod utils;

pub use engine::SearchEngine;
pub use slot::EngineSlot;
pub use utils::parse_query;
