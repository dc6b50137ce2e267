// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use loomsearch::build::run_build;
use loomsearch::{parse_query, verify_index, Bm25Params, SearchEngine, SearchIndex, SearchOptions};

mod cli;
use cli::display::{print_inspect, print_report, print_results};
use cli::{Cli, Commands};

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_index(path: &Path) -> Result<SearchIndex> {
    SearchIndex::load(path).with_context(|| format!("Failed to load index {}", path.display()))
}

fn write_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).context("Failed to write JSON")?;
    writeln!(out)?;
    Ok(())
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Search {
            index,
            query,
            limit,
            k1,
            b,
            json,
            explain,
        } => {
            let engine = SearchEngine::with_params(load_index(&index)?, Bm25Params::new(k1, b));
            let options = SearchOptions { limit, explain };

            let start = Instant::now();
            let results = engine.search_with(&query, &options);
            let elapsed = start.elapsed();

            if json {
                write_json(&results)?;
            } else {
                print_results(&query, &parse_query(&query), &results, elapsed);
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Inspect { index, top } => {
            let snapshot = load_index(&index)?;
            print_inspect(&index.display().to_string(), &snapshot, top);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Verify { index, json } => {
            let snapshot = load_index(&index)?;
            let report = verify_index(&snapshot);

            if json {
                write_json(&report)?;
            } else {
                print_report(&index.display().to_string(), &report);
            }

            if report.is_clean() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }

        Commands::Index { input, output } => {
            let summary = run_build(&input, &output)
                .with_context(|| format!("Failed to build index from {}", input.display()))?;
            eprintln!(
                "Indexed {} documents ({} terms, avg length {:.2}) into {}",
                summary.documents,
                summary.terms,
                summary.average_document_length,
                output.display()
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
