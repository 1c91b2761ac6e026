//! Command-line arguments for the trade aggregator.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use trade_common::{OutputFormat, ZeroVolumePolicy};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Trade log to read, one `timestamp,symbol,quantity,price` record per line.
    pub input: String,

    /// Report file to create (truncated if it exists).
    pub output: String,

    /// Report encoding.
    #[clap(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// How to report a symbol whose traded volume nets to zero.
    #[clap(long, value_enum, default_value_t = ZeroVolumePolicy::Fail)]
    pub zero_volume: ZeroVolumePolicy,
}
