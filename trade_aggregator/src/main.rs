//! Trade Aggregator — reads a trade log and writes per-symbol statistics.
//!
//! Each input line is `timestamp,symbol,quantity,price`. Lines that do not parse are
//! logged and skipped. At the end of input one row per symbol is written, sorted by
//! symbol: `symbol,max_gap,total_volume,average_price,max_price`.
//!
//! Usage example (CLI):
//! ```bash
//! trade_aggregator ./trades.csv ./stats.csv
//! RUST_LOG=warn trade_aggregator ./trades.csv ./stats.jsonl --format jsonl --zero-volume skip
//! ```
//!
//! The output file is only created once the report has been computed, and it is
//! removed again if writing the rows fails, so a failed run leaves no partial output
//! behind.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use log::{error, info, warn};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use trade_common::{AggregationStore, Result, TradeError, ingest};

fn run(args: Args) -> Result<()> {
    let input_path = normalize_path(&args.input);
    let output_path = normalize_path(&args.output);

    let input = File::open(&input_path).map_err(|source| TradeError::OpenInput {
        path: input_path.clone(),
        source,
    })?;
    info!("Reading trades from {}", input_path.display());

    let mut store = AggregationStore::new();
    ingest(BufReader::new(input), &mut store)?;
    let rows = store.report(args.zero_volume)?;

    write_or_discard(&output_path, |output| {
        args.format.write_rows(&rows, BufWriter::new(output))
    })?;
    info!(
        "Wrote {} rows ({}) to {}",
        rows.len(),
        args.format,
        output_path.display()
    );
    Ok(())
}

/// Creates `path` and hands it to `write`. On a write failure the file is removed.
fn write_or_discard<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(File) -> Result<()>,
{
    let output = File::create(path).map_err(|source| TradeError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    if let Err(e) = write(output) {
        if let Err(rm) = fs::remove_file(path) {
            warn!("Failed to remove partial output {}: {}", path.display(), rm);
        }
        return Err(e);
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
