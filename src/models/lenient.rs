//! Lenient numeric cells.
//!
//! Roster cells and money fields arrive from a free-form editing grid, so a
//! value may be a number, numeric text, or something unusable. Nothing here
//! fails: unusable input simply has no numeric value.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A raw input cell that may or may not hold a number.
///
/// Deserializes from any JSON or YAML value.
///
/// Values outside the `Decimal` range (magnitude above
/// `79228162514264337593543950335`, e.g. `1e30`) have no numeric value and
/// so count as zero wherever a cell is read leniently.
///
/// # Example
///
/// ```
/// use cm_cost_engine::models::LenientNumber;
/// use rust_decimal::Decimal;
///
/// let cell: LenientNumber = serde_json::from_str("\"1 250 000\"").unwrap();
/// assert_eq!(cell.to_decimal(), Some(Decimal::from(1_250_000)));
///
/// let cell: LenientNumber = serde_json::from_str("true").unwrap();
/// assert_eq!(cell.to_decimal(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LenientNumber {
    /// A value that was already numeric.
    Number(Decimal),
    /// Free text, parsed on demand.
    Text(String),
    /// Anything else (booleans, nulls, nested values).
    Other(serde_json::Value),
}

impl LenientNumber {
    /// Returns the numeric value of the cell, if it has one.
    ///
    /// Text is parsed after removing all whitespace, accepting plain and
    /// scientific notation.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => parse_decimal_text(text),
            Self::Other(_) => None,
        }
    }

    /// Returns the numeric value of the cell, or zero when it has none.
    pub fn or_zero(&self) -> Decimal {
        self.to_decimal().unwrap_or(Decimal::ZERO)
    }
}

impl Default for LenientNumber {
    fn default() -> Self {
        Self::Other(serde_json::Value::Null)
    }
}

impl From<Decimal> for LenientNumber {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for LenientNumber {
    fn from(value: i64) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<i32> for LenientNumber {
    fn from(value: i32) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<&str> for LenientNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for LenientNumber {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Parses a free-text money amount such as `"1 250 000"`.
///
/// Spaces are stripped before parsing. Empty or unparsable text is zero.
///
/// # Examples
///
/// ```
/// use cm_cost_engine::models::parse_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_money("2 500 000"), Decimal::from(2_500_000));
/// assert_eq!(parse_money(""), Decimal::ZERO);
/// assert_eq!(parse_money("n/a"), Decimal::ZERO);
/// ```
pub fn parse_money(text: &str) -> Decimal {
    parse_decimal_text(text).unwrap_or(Decimal::ZERO)
}

fn parse_decimal_text(text: &str) -> Option<Decimal> {
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_integer_cell() {
        let cell: LenientNumber = serde_json::from_str("30").unwrap();
        assert_eq!(cell.to_decimal(), Some(dec("30")));
    }

    #[test]
    fn test_deserialize_fractional_cell() {
        let cell: LenientNumber = serde_json::from_str("0.3").unwrap();
        assert_eq!(cell.to_decimal(), Some(dec("0.3")));
    }

    #[test]
    fn test_numeric_text_is_parsed() {
        let cell: LenientNumber = serde_json::from_str("\" 45.5 \"").unwrap();
        assert_eq!(cell.to_decimal(), Some(dec("45.5")));
    }

    #[test]
    fn test_scientific_text_is_parsed() {
        let cell = LenientNumber::from("1.5e5");
        assert_eq!(cell.to_decimal(), Some(dec("150000")));
    }

    #[test]
    fn test_garbage_text_has_no_value() {
        let cell: LenientNumber = serde_json::from_str("\"thirty\"").unwrap();
        assert_eq!(cell, LenientNumber::Text("thirty".to_string()));
        assert_eq!(cell.to_decimal(), None);
        assert_eq!(cell.or_zero(), Decimal::ZERO);
    }

    #[test]
    fn test_null_and_bool_have_no_value() {
        let null: LenientNumber = serde_json::from_str("null").unwrap();
        let flag: LenientNumber = serde_json::from_str("false").unwrap();
        assert_eq!(null.to_decimal(), None);
        assert_eq!(flag.to_decimal(), None);
    }

    #[test]
    fn test_out_of_range_values_have_no_value() {
        let number: LenientNumber = serde_json::from_str("1e30").unwrap();
        assert_eq!(number.to_decimal(), None);
        assert_eq!(number.or_zero(), Decimal::ZERO);

        assert_eq!(LenientNumber::from("1e30").to_decimal(), None);
        assert_eq!(
            LenientNumber::from("79228162514264337593543950335").to_decimal(),
            Some(Decimal::MAX)
        );
    }

    #[test]
    fn test_default_is_missing() {
        assert_eq!(LenientNumber::default().to_decimal(), None);
    }

    #[test]
    fn test_parse_money_strips_spaces() {
        assert_eq!(parse_money("1 234 567.89"), dec("1234567.89"));
    }

    #[test]
    fn test_parse_money_empty_is_zero() {
        assert_eq!(parse_money(""), Decimal::ZERO);
        assert_eq!(parse_money("   "), Decimal::ZERO);
    }

    #[test]
    fn test_parse_money_unparsable_is_zero() {
        assert_eq!(parse_money("$1,000"), Decimal::ZERO);
    }
}
