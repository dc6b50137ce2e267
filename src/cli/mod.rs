// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the loomsearch command-line interface.
//!
//! Four subcommands: `search` to query a snapshot, `inspect` to look at its
//! corpus statistics and vocabulary, `verify` to check it for structural
//! problems, and `index` to build one from extracted documents.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "loomsearch",
    about = "BM25 search over a prebuilt inverted index",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index snapshot and display ranked results
    Search {
        /// Path to the index snapshot (JSON)
        index: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = loomsearch::DEFAULT_LIMIT)]
        limit: usize,

        /// BM25 term-frequency saturation
        #[arg(long, env = "LOOMSEARCH_K1", default_value_t = loomsearch::DEFAULT_K1)]
        k1: f64,

        /// BM25 length-normalization strength (0..=1)
        #[arg(long, env = "LOOMSEARCH_B", default_value_t = loomsearch::DEFAULT_B)]
        b: f64,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Include per-term score contributions
        #[arg(long)]
        explain: bool,
    },

    /// Show corpus statistics and the most common terms
    Inspect {
        /// Path to the index snapshot (JSON)
        index: PathBuf,

        /// Number of terms to list, by document frequency
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Check a snapshot for structural problems
    Verify {
        /// Path to the index snapshot (JSON)
        index: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build an index snapshot from a directory of JSON documents
    Index {
        /// Input directory containing manifest.json and document files
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the snapshot
        #[arg(short, long)]
        output: PathBuf,
    },
}
