//! # Fixed-Point Value Types
//!
//! Provides the `Money` and `Weight` types for handling decimal values safely.
//!
//! ## Why Integer Fixed-Point?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer minor units                                  │
//! │    Money  = i64 cents   (2 implied decimals, DECIMAL(10,2) range)   │
//! │    Weight = i64 grams   (3 implied decimals, DECIMAL(10,3) range)   │
//! │                                                                     │
//! │  The database, calculations, and services all use minor units.      │
//! │  Only the console converts to decimal strings for display.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::{Money, Weight};
//!
//! // Create from minor units (preferred)
//! let price = Money::from_cents(193750); // 1937.50
//!
//! // Or parse user input
//! let weight: Weight = "1.000".parse().unwrap();
//! assert_eq!(weight.grams(), 1000);
//!
//! // NEVER from floats - no such constructor exists.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Parse Error
// =============================================================================

/// Errors produced when parsing a decimal string into a fixed-point value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAmountError {
    /// The input is not a plain decimal number.
    #[error("'{0}' is not a decimal number")]
    Invalid(String),

    /// The input carries more fractional digits than the type can hold.
    #[error("'{0}' has more than {1} decimal places")]
    TooPrecise(String, usize),

    /// The input does not fit in the underlying integer.
    #[error("'{0}' is out of range")]
    OutOfRange(String),
}

/// Parses a decimal string into an integer count of minor units.
///
/// `scale` is the number of implied decimal places: 2 for cents, 3 for grams.
/// Accepts `123`, `123.4`, `-0.05`; rejects exponents, grouping separators
/// and any excess precision rather than silently rounding it away.
fn parse_fixed(input: &str, scale: usize) -> Result<i64, ParseAmountError> {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (whole, fraction) = match digits.split_once('.') {
        Some((w, f)) => (w, f),
        None => (digits, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(ParseAmountError::Invalid(input.to_string()));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(ParseAmountError::Invalid(input.to_string()));
    }
    if fraction.len() > scale {
        return Err(ParseAmountError::TooPrecise(input.to_string(), scale));
    }

    let overflow = || ParseAmountError::OutOfRange(input.to_string());

    let whole_units: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| overflow())?
    };
    let mut fraction_units: i64 = if fraction.is_empty() {
        0
    } else {
        fraction.parse().map_err(|_| overflow())?
    };
    // "5" in the tenths position of a 2-scale value is 50 minor units
    fraction_units *= 10_i64.pow((scale - fraction.len()) as u32);

    let magnitude = whole_units
        .checked_mul(10_i64.pow(scale as u32))
        .and_then(|v| v.checked_add(fraction_units))
        .ok_or_else(overflow)?;

    Ok(if negative { -magnitude } else { magnitude })
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value as an integer count of cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Lets arithmetic produce negatives that validation
///   then rejects, instead of wrapping silently
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support (serialized as the raw cent count)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole and fractional units.
    ///
    /// For negative amounts only the whole part carries the sign:
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-currency portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies by a unit count, e.g. price × stock for inventory value.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Display renders the plain decimal form, e.g. `1937.50` or `-0.05`.
///
/// No currency symbol: presentation concerns like that belong to the
/// console layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl FromStr for Money {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fixed(s, 2).map(Money)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Weight Type
// =============================================================================

/// A weight as an integer count of grams (three implied decimals of a kg).
///
/// Same rationale as [`Money`]: exact arithmetic, exact storage, and the
/// DECIMAL(10,3) range of the weight column.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Weight(i64);

impl Weight {
    /// Creates a Weight from grams.
    #[inline]
    pub const fn from_grams(grams: i64) -> Self {
        Weight(grams)
    }

    /// Returns the value in grams.
    #[inline]
    pub const fn grams(&self) -> i64 {
        self.0
    }

    /// Returns the whole-kilogram portion.
    #[inline]
    pub const fn kilos(&self) -> i64 {
        self.0 / 1000
    }

    /// Zero weight.
    #[inline]
    pub const fn zero() -> Self {
        Weight(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

/// Display renders kilograms with three decimals, e.g. `0.500`.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:03}", sign, self.kilos().abs(), (self.0 % 1000).abs())
    }
}

impl FromStr for Weight {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fixed(s, 3).map(Weight)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(193750).to_string(), "1937.50");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
    }

    #[test]
    fn test_money_parse() {
        assert_eq!("1937.50".parse::<Money>().unwrap().cents(), 193750);
        assert_eq!("1937.5".parse::<Money>().unwrap().cents(), 193750);
        assert_eq!("1937".parse::<Money>().unwrap().cents(), 193700);
        assert_eq!("0.05".parse::<Money>().unwrap().cents(), 5);
        assert_eq!("-2.50".parse::<Money>().unwrap().cents(), -250);
        assert_eq!(" 12.00 ".parse::<Money>().unwrap().cents(), 1200);
    }

    #[test]
    fn test_money_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!("-".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("12,50".parse::<Money>().is_err());
        assert!("1e3".parse::<Money>().is_err());
        assert!("12.345".parse::<Money>().is_err()); // excess precision, not rounded
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
        assert_eq!(a.multiply_quantity(4).cents(), 4000);
    }

    #[test]
    fn test_weight_parse_and_display() {
        assert_eq!("1.000".parse::<Weight>().unwrap().grams(), 1000);
        assert_eq!("0.5".parse::<Weight>().unwrap().grams(), 500);
        assert_eq!("12".parse::<Weight>().unwrap().grams(), 12000);
        assert!("0.0005".parse::<Weight>().is_err());

        assert_eq!(Weight::from_grams(500).to_string(), "0.500");
        assert_eq!(Weight::from_grams(1000).to_string(), "1.000");
        assert_eq!(Weight::from_grams(12345).to_string(), "12.345");
    }

    #[test]
    fn test_parse_display_round_trip() {
        for text in ["0.00", "1937.50", "99999999.99"] {
            let money: Money = text.parse().unwrap();
            assert_eq!(money.to_string(), text);
        }
        for text in ["0.000", "1.000", "9999999.999"] {
            let weight: Weight = text.parse().unwrap();
            assert_eq!(weight.to_string(), text);
        }
    }
}
