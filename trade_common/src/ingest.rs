//! Line-by-line ingestion of a trade log into an `AggregationStore`.
//!
//! Rejected lines are logged with their line number and raw text, counted, and
//! skipped. Lines are read as raw bytes; invalid UTF-8 is replaced with U+FFFD and
//! the line is still processed. Only read errors from the reader stop the loop.
use std::borrow::Cow;
use std::io::BufRead;

use log::{error, info, warn};

use crate::error::RejectionReason;
use crate::record::TradeRecord;
use crate::result::Result;
use crate::store::AggregationStore;

/// Line counts for one ingestion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Lines read from the input.
    pub lines: u64,
    /// Lines parsed and applied to the store.
    pub accepted: u64,
    /// Lines rejected for having the wrong number of fields.
    pub malformed: u64,
    /// Lines rejected for a non-numeric numeric field.
    pub invalid_number: u64,
    /// Lines rejected for a numeric field out of range.
    pub out_of_range: u64,
    /// Lines that were not valid UTF-8 and were decoded lossily.
    pub lossy_decoded: u64,
}

impl IngestSummary {
    /// Total number of skipped lines.
    pub fn rejected(&self) -> u64 {
        self.malformed + self.invalid_number + self.out_of_range
    }

    fn record_rejection(&mut self, reason: &RejectionReason) {
        match reason {
            RejectionReason::MalformedLine { .. } => self.malformed += 1,
            RejectionReason::InvalidNumber { .. } => self.invalid_number += 1,
            RejectionReason::NumberOutOfRange { .. } => self.out_of_range += 1,
        }
    }
}

/// Reads every line of `reader`, applying well-formed trades to `store` in order.
pub fn ingest<R: BufRead>(mut reader: R, store: &mut AggregationStore) -> Result<IngestSummary> {
    let mut summary = IngestSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        summary.lines += 1;
        let line_no = summary.lines;

        let line = String::from_utf8_lossy(strip_line_terminator(&buf));
        if let Cow::Owned(_) = line {
            warn!("line {}: invalid UTF-8 replaced: {}", line_no, line);
            summary.lossy_decoded += 1;
        }

        match TradeRecord::parse(&line) {
            Ok(record) => {
                store.update(&record);
                summary.accepted += 1;
            }
            Err(reason) => {
                report_rejection(line_no, &line, &reason);
                summary.record_rejection(&reason);
            }
        }
    }

    info!(
        "Ingested {} lines: {} accepted, {} rejected, {} symbols",
        summary.lines,
        summary.accepted,
        summary.rejected(),
        store.len()
    );
    info!(
        "Rejections: {} malformed, {} invalid, {} out of range; {} lines decoded lossily",
        summary.malformed,
        summary.invalid_number,
        summary.out_of_range,
        summary.lossy_decoded
    );
    Ok(summary)
}

/// Drops a trailing `\n` or `\r\n`.
fn strip_line_terminator(buf: &[u8]) -> &[u8] {
    match buf.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => buf,
    }
}

fn report_rejection(line_no: u64, line: &str, reason: &RejectionReason) {
    match reason {
        RejectionReason::MalformedLine { .. } => warn!("line {}: {}: {}", line_no, reason, line),
        _ => error!("line {}: {}: {}", line_no, reason, line),
    }
}
