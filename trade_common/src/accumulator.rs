//! Running statistics for a single symbol.
//!
//! A `SymbolAccumulator` folds trades in the order they are presented:
//!
//! - `SymbolAccumulator::apply(record)` updates the gap, volume, weighted sum and
//!   price maximum.
//! - `SymbolAccumulator::average_price()` divides the weighted sum by the volume,
//!   truncating toward zero, and returns `None` when the volume nets to zero.
//!
//! Design notes:
//! - A `last_timestamp` of 0 means "no trade applied yet", so a trade stamped 0
//!   never opens a gap for the trade that follows it.
//! - Gaps use wrapping unsigned subtraction. A timestamp that goes backwards
//!   produces a gap close to `u64::MAX` instead of an ordering error.
//! - `max_price` starts at 0 like every other counter, so a symbol whose prices
//!   are all negative reports a maximum of 0. Open question: whether that floor is
//!   intended or a latent defect in the reference behavior.
//! - `weighted_sum` is an `i128`; the product of two `i32` values summed over any
//!   realistic number of trades cannot overflow it.

use crate::record::TradeRecord;

/// Per-symbol statistics, updated one trade at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolAccumulator {
    last_timestamp: u64,
    max_gap: u64,
    total_volume: i64,
    weighted_sum: i128,
    max_price: i32,
    trade_count: u64,
}

impl SymbolAccumulator {
    /// Create an accumulator with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trade into the statistics.
    pub fn apply(&mut self, record: &TradeRecord) {
        if self.last_timestamp != 0 {
            let gap = record.timestamp.wrapping_sub(self.last_timestamp);
            self.max_gap = self.max_gap.max(gap);
        }
        self.last_timestamp = record.timestamp;

        self.total_volume += i64::from(record.quantity);
        self.weighted_sum += i128::from(record.quantity) * i128::from(record.price);
        self.max_price = self.max_price.max(record.price);
        self.trade_count += 1;
    }

    /// Volume-weighted average price, or `None` if the total volume is zero.
    pub fn average_price(&self) -> Option<i128> {
        if self.total_volume == 0 {
            None
        } else {
            Some(self.weighted_sum / i128::from(self.total_volume))
        }
    }

    /// Timestamp of the most recently applied trade, 0 if none.
    pub fn last_timestamp(&self) -> u64 {
        self.last_timestamp
    }

    /// Largest gap between consecutive applied timestamps.
    pub fn max_gap(&self) -> u64 {
        self.max_gap
    }

    /// Sum of applied quantities.
    pub fn total_volume(&self) -> i64 {
        self.total_volume
    }

    /// Sum of `quantity * price` over applied trades.
    pub fn weighted_sum(&self) -> i128 {
        self.weighted_sum
    }

    /// Highest applied price, floored at 0.
    pub fn max_price(&self) -> i32 {
        self.max_price
    }

    /// Number of trades applied so far.
    pub fn trade_count(&self) -> u64 {
        self.trade_count
    }
}
