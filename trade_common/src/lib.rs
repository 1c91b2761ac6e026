//!
//! Streaming per-symbol trade statistics.
//!
//! This crate aggregates:
//! - `error` — per-line `RejectionReason` and run-level `TradeError`.
//! - `result` — handy `Result<T, TradeError>` alias.
//! - `record` — `TradeRecord` and the line parser.
//! - `accumulator` — running statistics for one symbol.
//! - `store` — the per-symbol `AggregationStore` and its sorted report.
//! - `ingest` — the line-by-line driver feeding a store from any `BufRead`.
//! - `report` — csv / jsonl rendering of report rows.
#![warn(missing_docs)]
pub mod accumulator;
pub mod error;
pub mod ingest;
pub mod record;
pub mod report;
pub mod result;
pub mod store;

pub use error::{RejectionReason, TradeError};
pub use ingest::{IngestSummary, ingest};
pub use record::TradeRecord;
pub use report::OutputFormat;
pub use result::Result;
pub use store::{AggregationStore, ReportRow, ZeroVolumePolicy};
