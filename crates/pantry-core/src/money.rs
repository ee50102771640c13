//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart total is a sum of many line prices; float error accumulates    │
//! │  exactly where customers notice it.                                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "1.60" parses to 160 cents; 7 × 160 = 1120, exactly                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pantry_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(160);
//!
//! // Or parse catalog price text
//! let parsed: Money = "1.60".parse().unwrap();
//! assert_eq!(parsed, price);
//!
//! // Arithmetic operations
//! let line = price * 7u32;
//! assert_eq!(line.cents(), 1120);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic stays closed under subtraction
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support, total ordering for best-price selection
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Price Text Parsing
// =============================================================================

/// Errors from parsing price text into [`Money`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoneyError {
    /// The text contains no digits at all (empty, `"."`, `"-"`).
    #[error("price text is empty")]
    Empty,

    /// A non-digit character where a digit was expected.
    #[error("'{text}' is not a decimal number")]
    InvalidDigit { text: String },

    /// More than two fraction digits. Integer-cent money cannot hold the
    /// value without silently rounding, so the parse is rejected instead.
    #[error("'{text}' has more than two fraction digits")]
    TooPrecise { text: String },

    /// The value does not fit in 64-bit cents.
    #[error("'{text}' is out of range")]
    OutOfRange { text: String },
}

/// Parses decimal price text (`"1.6"`, `"4.50"`, `"3"`, `".5"`) into cents.
///
/// At most two fraction digits are accepted; see
/// [`ParseMoneyError::TooPrecise`]. A leading `-` parses to a negative
/// value — whether that is acceptable is the caller's policy (the catalog
/// rejects it).
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(ParseMoneyError::Empty);
        }
        // Digit validation before the precision check, so "1.2.3" reports
        // as non-numeric rather than over-precise
        if ![whole, fraction]
            .iter()
            .all(|part| part.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(ParseMoneyError::InvalidDigit {
                text: s.to_string(),
            });
        }
        if fraction.len() > 2 {
            return Err(ParseMoneyError::TooPrecise {
                text: s.to_string(),
            });
        }

        let parse_digits = |part: &str| -> Result<i64, ParseMoneyError> {
            if part.is_empty() {
                return Ok(0);
            }
            part.parse::<i64>().map_err(|_| ParseMoneyError::OutOfRange {
                text: s.to_string(),
            })
        };

        let major = parse_digits(whole)?;
        // "1.6" means 60 cents, not 6
        let minor = parse_digits(fraction)? * if fraction.len() == 1 { 10 } else { 1 };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or(ParseMoneyError::OutOfRange {
                text: s.to_string(),
            })?;

        Ok(if negative { Money(-cents) } else { Money(cents) })
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money as plain decimal text.
///
/// ## Note
/// This is for debugging and diagnostics, not currency formatting.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation of line prices into a cart total.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
