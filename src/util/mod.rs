// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by the query path and the index builder.
//!
//! Both sides must fold case and strip punctuation identically, otherwise
//! vocabulary lookups quietly miss.

pub mod normalize;
pub mod stop_words;
