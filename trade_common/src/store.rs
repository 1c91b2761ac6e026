//! Per-symbol aggregation state and the sorted report.
//!
//! The store owns one `SymbolAccumulator` per symbol. It has a single writer:
//! whoever holds `&mut AggregationStore` feeds it records in input order, then
//! calls `report` once the input is exhausted.

use std::collections::HashMap;

use clap::ValueEnum;
use log::warn;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::accumulator::SymbolAccumulator;
use crate::error::TradeError;
use crate::record::TradeRecord;
use crate::result::Result;

/// What `report` does with a symbol whose total volume is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[derive(ValueEnum, Display, EnumString, Serialize, Deserialize)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ZeroVolumePolicy {
    /// Fail the whole report with `TradeError::EmptyVolumeDivision`.
    #[default]
    Fail,
    /// Leave the symbol out of the report.
    Skip,
    /// Report the symbol with an average price of 0.
    Zero,
}

/// One output line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Instrument identifier.
    pub symbol: String,
    /// Largest gap between consecutive trades.
    pub max_gap: u64,
    /// Sum of traded quantities.
    pub total_volume: i64,
    /// Volume-weighted average price, truncated toward zero.
    pub average_price: i128,
    /// Highest traded price.
    pub max_price: i32,
}

/// Mapping from symbol to its running statistics.
#[derive(Debug, Default)]
pub struct AggregationStore {
    symbols: HashMap<String, SymbolAccumulator>,
}

impl AggregationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one parsed trade, creating the symbol's accumulator on first sight.
    pub fn update(&mut self, record: &TradeRecord) {
        if let Some(acc) = self.symbols.get_mut(&record.symbol) {
            acc.apply(record);
            return;
        }
        let mut acc = SymbolAccumulator::new();
        acc.apply(record);
        self.symbols.insert(record.symbol.clone(), acc);
    }

    /// Statistics for `symbol`, if any trade for it was applied.
    pub fn get(&self, symbol: &str) -> Option<&SymbolAccumulator> {
        self.symbols.get(symbol)
    }

    /// Number of distinct symbols seen.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// `true` if no trade has been applied.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Build the report, one row per symbol, ascending by byte-wise symbol order.
    ///
    /// Symbols whose volume nets to zero are handled according to `policy`.
    pub fn report(&self, policy: ZeroVolumePolicy) -> Result<Vec<ReportRow>> {
        let mut entries: Vec<(&String, &SymbolAccumulator)> = self.symbols.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

        let mut rows = Vec::with_capacity(entries.len());
        for (symbol, acc) in entries {
            let average_price = match (acc.average_price(), policy) {
                (Some(avg), _) => avg,
                (None, ZeroVolumePolicy::Fail) => {
                    return Err(TradeError::EmptyVolumeDivision {
                        symbol: symbol.clone(),
                    });
                }
                (None, ZeroVolumePolicy::Skip) => {
                    warn!("Skipping {}: total volume is zero", symbol);
                    continue;
                }
                (None, ZeroVolumePolicy::Zero) => {
                    warn!("Reporting {} with average price 0: total volume is zero", symbol);
                    0
                }
            };
            rows.push(ReportRow {
                symbol: symbol.clone(),
                max_gap: acc.max_gap(),
                total_volume: acc.total_volume(),
                average_price,
                max_price: acc.max_price(),
            });
        }
        Ok(rows)
    }
}
