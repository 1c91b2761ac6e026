//! Error types shared by the aggregation library and the command-line driver.
//!
//! Two layers are kept apart:
//! - `RejectionReason` describes why a single input line was skipped. It is an
//!   expected, per-line outcome and never aborts a run.
//! - `TradeError` is the run-level error that the driver propagates with `?`.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a raw input line could not be turned into a `TradeRecord`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// The line did not split into exactly four comma-separated fields.
    #[error("Invalid line format (expected 4 columns, found {fields})")]
    MalformedLine {
        /// Number of fields actually found.
        fields: usize,
    },

    /// A numeric field held text that is not an integer.
    #[error("Invalid numeric format in field `{field}`: {value:?}")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// Raw field text.
        value: String,
    },

    /// A numeric field held an integer outside the range of its target type.
    #[error("Numeric value out of range in field `{field}`: {value}")]
    NumberOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Raw field text.
        value: String,
    },
}

/// Run-level error type.
#[derive(Error, Debug)]
pub enum TradeError {
    /// I/O error while reading the input or writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file could not be opened for reading.
    #[error("Failed to open input file {}: {source}", .path.display())]
    OpenInput {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The output file could not be created.
    #[error("Failed to create output file {}: {source}", .path.display())]
    CreateOutput {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A symbol's total traded volume is zero, so its average price is undefined.
    #[error("Cannot compute average price for `{symbol}`: total volume is zero")]
    EmptyVolumeDivision {
        /// Symbol whose volume nets to zero.
        symbol: String,
    },

    /// Failure while encoding a report row as JSON.
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
