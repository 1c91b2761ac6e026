//! Trade record model and the line parser.
//!
//! An input line has the shape `timestamp,symbol,quantity,price`. Fields are split
//! on `,` with empty fields preserved; there is no trimming and no quoting.
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RejectionReason;

/// Number of comma-separated fields in a well-formed line.
pub const FIELD_COUNT: usize = 4;

/// A single trade parsed from one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Logical trade time.
    pub timestamp: u64,
    /// Instrument identifier, taken verbatim from the line.
    pub symbol: String,
    /// Trade size.
    pub quantity: i32,
    /// Trade price in minor currency units.
    pub price: i32,
}

impl TradeRecord {
    /// Parses one raw line into a `TradeRecord`.
    ///
    /// Numeric fields are checked in the order timestamp, quantity, price and the
    /// first failure is returned.
    pub fn parse(line: &str) -> Result<Self, RejectionReason> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != FIELD_COUNT {
            return Err(RejectionReason::MalformedLine {
                fields: fields.len(),
            });
        }

        let timestamp = parse_field::<u64>("timestamp", fields[0])?;
        let quantity = parse_field::<i32>("quantity", fields[2])?;
        let price = parse_field::<i32>("price", fields[3])?;

        Ok(TradeRecord {
            timestamp,
            symbol: fields[1].to_string(),
            quantity,
            price,
        })
    }
}

impl FromStr for TradeRecord {
    type Err = RejectionReason;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Self::parse(line)
    }
}

/// Parses an integer field, separating magnitude errors from format errors.
fn parse_field<T>(field: &'static str, value: &str) -> Result<T, RejectionReason>
where
    T: FromStr<Err = ParseIntError>,
{
    value.parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            RejectionReason::NumberOutOfRange {
                field,
                value: value.to_string(),
            }
        }
        _ => RejectionReason::InvalidNumber {
            field,
            value: value.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_well_formed_line() {
        let record = TradeRecord::parse("100,AAPL,10,50").unwrap();
        assert_eq!(
            record,
            TradeRecord {
                timestamp: 100,
                symbol: "AAPL".to_string(),
                quantity: 10,
                price: 50,
            }
        );
    }

    #[test]
    fn accepts_negative_quantity_and_price() {
        let record: TradeRecord = "7,XYZ,-3,-20".parse().unwrap();
        assert_eq!(record.quantity, -3);
        assert_eq!(record.price, -20);
    }

    #[test]
    fn symbol_is_taken_verbatim() {
        let record = TradeRecord::parse("1, a b ,2,3").unwrap();
        assert_eq!(record.symbol, " a b ");

        let record = TradeRecord::parse("1,,2,3").unwrap();
        assert_eq!(record.symbol, "");
    }

    #[rstest]
    #[case("abc,AAPL,10", 3)]
    #[case("", 1)]
    #[case("1,AAPL,2,3,4", 5)]
    #[case("1,AAPL,2,3,", 5)]
    fn rejects_wrong_field_count(#[case] line: &str, #[case] fields: usize) {
        assert_eq!(
            TradeRecord::parse(line),
            Err(RejectionReason::MalformedLine { fields })
        );
    }

    #[rstest]
    #[case("100,AAPL,ten,50", "quantity")]
    #[case("abc,AAPL,10,50", "timestamp")]
    #[case("100,AAPL,10,", "price")]
    #[case(" 100,AAPL,10,50", "timestamp")]
    #[case("100,AAPL,10,50x", "price")]
    #[case("-1,AAPL,10,50", "timestamp")]
    #[case("100,AAPL,1.5,50", "quantity")]
    fn rejects_non_numeric_fields(#[case] line: &str, #[case] expected: &str) {
        match TradeRecord::parse(line) {
            Err(RejectionReason::InvalidNumber { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected InvalidNumber for {line:?}, got {other:?}"),
        }
    }

    #[rstest]
    #[case("100,AAPL,10,2147483648", "price")]
    #[case("100,AAPL,-2147483649,50", "quantity")]
    #[case("18446744073709551616,AAPL,10,50", "timestamp")]
    fn rejects_out_of_range_fields(#[case] line: &str, #[case] expected: &str) {
        match TradeRecord::parse(line) {
            Err(RejectionReason::NumberOutOfRange { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected NumberOutOfRange for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn accepts_type_boundaries() {
        let record = TradeRecord::parse("18446744073709551615,B,-2147483648,2147483647").unwrap();
        assert_eq!(record.timestamp, u64::MAX);
        assert_eq!(record.quantity, i32::MIN);
        assert_eq!(record.price, i32::MAX);
    }

    #[test]
    fn first_failing_field_wins() {
        assert_eq!(
            TradeRecord::parse("x,AAPL,99999999999,y"),
            Err(RejectionReason::InvalidNumber {
                field: "timestamp",
                value: "x".to_string(),
            })
        );
    }
}
