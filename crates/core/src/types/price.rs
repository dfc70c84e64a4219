//! Whole-unit price representation.
//!
//! Storefront product cards carry prices as whole currency units (e.g.
//! `data-price="1280"` for NT$1,280). Prices are parsed strictly: no
//! truncation of fractional input and no silent "not a number" values.

use core::fmt;
use core::iter::Sum;
use core::num::IntErrorKind;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is a negative number.
    #[error("price cannot be negative: {0}")]
    Negative(String),
    /// The input has a fractional part.
    #[error("price must be a whole number: {0}")]
    Fractional(String),
    /// The input does not fit in a price.
    #[error("price is too large: {0}")]
    TooLarge(String),
    /// The input is not a number at all.
    #[error("price is not a number: {0}")]
    NotANumber(String),
}

/// A non-negative price in whole currency units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(0);

    /// Create a new price from whole units.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the amount in whole units.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Parse a price from a product-card attribute.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is negative
    /// - Has a fractional part (`"12.5"`)
    /// - Overflows a `u64`
    /// - Is not a number
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PriceError::Empty);
        }

        if s.starts_with('-') && s.len() > 1 {
            return Err(PriceError::Negative(s.to_owned()));
        }

        if is_decimal_literal(s) {
            return Err(PriceError::Fractional(s.to_owned()));
        }

        s.parse::<u64>().map(Self).map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => PriceError::TooLarge(s.to_owned()),
            _ => PriceError::NotANumber(s.to_owned()),
        })
    }

    /// Multiply by a quantity, saturating at `u64::MAX`.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Add two prices, saturating at `u64::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

/// Returns true for inputs shaped like `123.45`, `.5` or `3.`.
fn is_decimal_literal(s: &str) -> bool {
    let Some((whole, frac)) = s.split_once('.') else {
        return false;
    };
    let digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    !(whole.is_empty() && frac.is_empty()) && digits(whole) && digits(frac)
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl From<Price> for u64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

/// ISO 4217 currency codes supported by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    TWD,
    USD,
    EUR,
    GBP,
    JPY,
}

impl CurrencyCode {
    /// Display prefix placed before an amount (e.g. `NT$`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::TWD => "NT$",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::JPY => "¥",
        }
    }

    /// Three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::TWD => "TWD",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::JPY => "JPY",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TWD" => Ok(Self::TWD),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "JPY" => Ok(Self::JPY),
            other => Err(format!("unsupported currency code: {other}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_number() {
        assert_eq!(Price::parse("1280").unwrap(), Price::new(1280));
        assert_eq!(Price::parse(" 0 ").unwrap(), Price::ZERO);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Price::parse("  "), Err(PriceError::Empty));
    }

    #[test]
    fn test_parse_negative() {
        assert!(matches!(Price::parse("-5"), Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_parse_fractional_is_not_truncated() {
        assert!(matches!(Price::parse("12.5"), Err(PriceError::Fractional(_))));
        assert!(matches!(Price::parse(".5"), Err(PriceError::Fractional(_))));
    }

    #[test]
    fn test_parse_not_a_number() {
        assert!(matches!(Price::parse("abc"), Err(PriceError::NotANumber(_))));
        assert!(matches!(Price::parse("12abc"), Err(PriceError::NotANumber(_))));
        assert!(matches!(Price::parse("1.2.3"), Err(PriceError::NotANumber(_))));
        assert!(matches!(Price::parse("-"), Err(PriceError::NotANumber(_))));
    }

    #[test]
    fn test_parse_too_large() {
        assert!(matches!(
            Price::parse("99999999999999999999999"),
            Err(PriceError::TooLarge(_))
        ));
    }

    #[test]
    fn test_times_and_sum_saturate() {
        assert_eq!(Price::new(100).times(2), Price::new(200));
        assert_eq!(Price::new(u64::MAX).times(2), Price::new(u64::MAX));

        let total: Price = [Price::new(200), Price::new(50)].into_iter().sum();
        assert_eq!(total, Price::new(250));
    }

    #[test]
    fn test_currency_code_parse() {
        assert_eq!("twd".parse::<CurrencyCode>().unwrap(), CurrencyCode::TWD);
        assert_eq!(CurrencyCode::TWD.symbol(), "NT$");
        assert!("XYZ".parse::<CurrencyCode>().is_err());
    }
}
