use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::types::AmountError;

pub const DEFAULT_DECIMAL_PLACES: u32 = 6;
pub const MAX_DECIMAL_PLACES: u32 = 28;

/// A decimal rendered with at most `decimal_places` fractional digits.
///
/// Midpoints round away from zero and trailing zeros are dropped, so `10.000` renders as `10`
/// and `0.1234565` at six places renders as `0.123457`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Rounded {
    value: Decimal,
    decimal_places: u32
}

impl Rounded {
    pub fn new(value: Decimal, decimal_places: u32) -> Self {
        Self {
            value,
            decimal_places: decimal_places.min(MAX_DECIMAL_PLACES)
        }
    }

    pub fn value(&self) -> Decimal {
        //NOTE: normalize() also folds a negative zero into zero, which keeps "-0" out of the report
        self.value
            .round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
    }
}

impl Display for Rounded {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.value())
    }
}

/// Parses a plain decimal literal: an optional sign, digits, and an optional `.` followed by more digits.
///
/// Whitespace around the literal is ignored. Exponents, digit separators and any other notation
/// `Decimal::from_str` would tolerate are rejected.
pub fn parse_amount(value: &str) -> Result<Decimal, AmountError> {
    let value = value.trim();

    let (negative, unsigned) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value)
    };

    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if integer.is_empty() && fraction.is_empty() {
        return Err(AmountError::InvalidFormat(format!("[{value}] has no digits")));
    }

    if !integer.bytes().chain(fraction.bytes()).all(|byte| byte.is_ascii_digit()) {
        return Err(AmountError::InvalidFormat(format!("[{value}] is not a decimal literal")));
    }

    //NOTE: Rebuilt from the validated digits so `.5` and `5.` parse like `0.5` and `5`
    let sign = if negative { "-" } else { "" };
    let integer = if integer.is_empty() { "0" } else { integer };
    let literal = if fraction.is_empty() {
        format!("{sign}{integer}")
    } else {
        format!("{sign}{integer}.{fraction}")
    };

    Decimal::from_str(&literal).map_err(|_| AmountError::Overflow(value.to_string()))
}

/// Serde adapter running a field through [`parse_amount`].
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_amount(&value).map_err(de::Error::custom)
}
