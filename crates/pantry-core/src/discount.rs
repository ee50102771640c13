//! # Discount Module
//!
//! Per-ingredient discount rules.
//!
//! ## Rule Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Discount Rules                                   │
//! │                                                                         │
//! │  trait Discount ── line_total(quantity, unit_price) -> Money           │
//! │       │                                                                 │
//! │       ├── NoDiscount      quantity × price (identity baseline)         │
//! │       │                                                                 │
//! │       └── BulkDiscount    "buy N get M free": for every completed      │
//! │                           group of N+M units, only N are charged;      │
//! │                           a trailing partial group pays in full        │
//! │                                                                         │
//! │  Each rule targets exactly ONE ingredient name. The cart ignores       │
//! │  rules whose ingredient does not match the line being priced.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Worked Example
//! `BulkDiscount("pepper", buy: 3, free: 1)` on 7 peppers at 1.60:
//! group = 4, bulks = 7 / 4 = 1, remainder = 7 % 4 = 3.
//! Charged units = 1 × 3 + 3 = 6, so the line costs 9.60 instead of 11.20.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Discount Capability
// =============================================================================

/// The discount capability: one mandatory pricing method plus the name of
/// the ingredient the rule targets.
///
/// Implementors must guarantee `line_total(q, p) <= p * q` — a discount
/// never increases a price. The cart additionally enforces this by always
/// considering the undiscounted price as a candidate.
pub trait Discount {
    /// Name of the single ingredient this rule applies to.
    fn ingredient(&self) -> &str;

    /// Computes the price of `quantity` units at `unit_price` under this
    /// rule.
    fn line_total(&self, quantity: u32, unit_price: Money) -> Money;
}

// =============================================================================
// NoDiscount
// =============================================================================

/// The identity rule: full price, no reduction.
///
/// Useful as an explicit baseline in rule lists and in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoDiscount {
    ingredient: String,
}

impl NoDiscount {
    /// Creates an identity rule for `ingredient`.
    pub fn new(ingredient: impl Into<String>) -> Self {
        NoDiscount {
            ingredient: ingredient.into(),
        }
    }
}

impl Discount for NoDiscount {
    fn ingredient(&self) -> &str {
        &self.ingredient
    }

    fn line_total(&self, quantity: u32, unit_price: Money) -> Money {
        unit_price * quantity
    }
}

// =============================================================================
// BulkDiscount
// =============================================================================

/// "Buy N get M free" rule.
///
/// For every completed group of `buy + free` units, only `buy` units are
/// charged. An incomplete trailing group is charged in full; only whole
/// groups earn the discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkDiscount {
    ingredient: String,
    buy: u32,
    free: u32,
}

impl BulkDiscount {
    /// Creates a bulk rule for `ingredient`.
    ///
    /// ## Errors
    /// [`CoreError::InvalidDiscountParameter`] when `buy + free == 0`:
    /// the group size is the divisor of the bulk calculation and an empty
    /// group makes it undefined.
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::discount::{BulkDiscount, Discount};
    /// use pantry_core::money::Money;
    ///
    /// // buy 3 get 1 free
    /// let rule = BulkDiscount::new("pepper", 3, 1).unwrap();
    /// let price = rule.line_total(7, Money::from_cents(160));
    /// assert_eq!(price, Money::from_cents(960));
    /// ```
    pub fn new(ingredient: impl Into<String>, buy: u32, free: u32) -> CoreResult<Self> {
        let ingredient = ingredient.into();
        if buy + free == 0 {
            return Err(CoreError::InvalidDiscountParameter { ingredient });
        }
        Ok(BulkDiscount {
            ingredient,
            buy,
            free,
        })
    }

    /// Units the customer pays for in each completed group.
    #[inline]
    pub fn buy(&self) -> u32 {
        self.buy
    }

    /// Units given away in each completed group.
    #[inline]
    pub fn free(&self) -> u32 {
        self.free
    }

    /// Size of one discount group (`buy + free`), always ≥ 1.
    #[inline]
    pub fn group_size(&self) -> u32 {
        self.buy + self.free
    }
}

impl Discount for BulkDiscount {
    fn ingredient(&self) -> &str {
        &self.ingredient
    }

    fn line_total(&self, quantity: u32, unit_price: Money) -> Money {
        let group = self.group_size();
        let bulks = quantity / group;
        let remainder = quantity % group;

        // i64 math: bulks * buy can exceed u32 range
        let charged_units = bulks as i64 * self.buy as i64 + remainder as i64;
        unit_price * charged_units
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
