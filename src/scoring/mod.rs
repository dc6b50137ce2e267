// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! `core` is pure BM25 arithmetic over plain numbers. `ranking` turns a bag of
//! accumulated scores into an ordered, truncated list. Neither knows what a
//! snapshot looks like.

mod core;
pub mod ranking;

pub use self::core::*;
