//! Rendering of report rows.
//!
//! `csv` writes `symbol,max_gap,total_volume,average_price,max_price` per line with
//! no header. `jsonl` writes one JSON object per line with the same fields.
use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::result::Result;
use crate::store::ReportRow;

/// Output encoding for the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[derive(ValueEnum, Display, EnumString, Serialize, Deserialize)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values, no header.
    #[default]
    Csv,
    /// One JSON object per line.
    Jsonl,
}

impl OutputFormat {
    /// Writes `rows` to `writer` in this format, in the given order.
    pub fn write_rows<W: Write>(&self, rows: &[ReportRow], mut writer: W) -> Result<()> {
        for row in rows {
            match self {
                OutputFormat::Csv => writeln!(
                    writer,
                    "{},{},{},{},{}",
                    row.symbol, row.max_gap, row.total_volume, row.average_price, row.max_price
                )?,
                OutputFormat::Jsonl => {
                    serde_json::to_writer(&mut writer, row)?;
                    writer.write_all(b"\n")?;
                }
            }
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ReportRow> {
        vec![
            ReportRow {
                symbol: "AAPL".to_string(),
                max_gap: 150,
                total_volume: 17,
                average_price: 52,
                max_price: 60,
            },
            ReportRow {
                symbol: "ZETA".to_string(),
                max_gap: 0,
                total_volume: -4,
                average_price: -7,
                max_price: -3,
            },
        ]
    }

    fn render(format: OutputFormat) -> String {
        let mut out = Vec::new();
        format.write_rows(&rows(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn csv_lines() {
        assert_eq!(render(OutputFormat::Csv), "AAPL,150,17,52,60\nZETA,0,-4,-7,-3\n");
    }

    #[test]
    fn jsonl_lines_keep_order() {
        assert_eq!(
            render(OutputFormat::Jsonl),
            concat!(
                r#"{"symbol":"AAPL","max_gap":150,"total_volume":17,"average_price":52,"max_price":60}"#,
                "\n",
                r#"{"symbol":"ZETA","max_gap":0,"total_volume":-4,"average_price":-7,"max_price":-3}"#,
                "\n",
            )
        );
    }

    #[test]
    fn empty_report_writes_nothing() {
        let mut out = Vec::new();
        OutputFormat::Csv.write_rows(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn format_names() {
        assert_eq!(OutputFormat::default(), OutputFormat::Csv);
        assert_eq!(OutputFormat::Jsonl.to_string(), "jsonl");
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
    }
}
