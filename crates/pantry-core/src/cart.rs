//! # Cart Module
//!
//! The shopping cart and its best-price totalling policy.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart::total(discounts)                             │
//! │                                                                         │
//! │  for each (name, quantity) line:                                       │
//! │                                                                         │
//! │    unit_price = catalog.price_of(name)      (zero when not stocked)    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │    candidates = [ rule.line_total(qty, unit_price)                     │
//! │                   for rule in discounts if rule targets name ]         │
//! │                 + [ quantity × unit_price ]  ← always a candidate      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │    charged = min(candidates)                                           │
//! │                                                                         │
//! │  total = Σ charged                                                     │
//! │                                                                         │
//! │  Rules for the same ingredient are ALTERNATIVES, never stacked.        │
//! │  The baseline candidate guarantees a rule can never raise the total.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! A cart borrows its catalog (`&'a Catalog`): the catalog must outlive the
//! cart, and the cart never manages the catalog's lifetime. One catalog can
//! back any number of carts.

use std::collections::HashMap;
use std::fmt;

use crate::catalog::Catalog;
use crate::discount::Discount;
use crate::money::Money;

// =============================================================================
// Cart
// =============================================================================

/// A quantity multiset of ingredient names, bound to one price catalog.
///
/// ## Invariants
/// - Quantities only ever increase via [`Cart::add`]; there is no removal
/// - Names unknown to the catalog are legal and price at zero
/// - Discount rules are supplied per [`Cart::total`] call, never stored
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    catalog: &'a Catalog,
    lines: HashMap<String, u32>,
}

impl<'a> Cart<'a> {
    /// Creates an empty cart backed by `catalog`.
    pub fn new(catalog: &'a Catalog) -> Self {
        Cart {
            catalog,
            lines: HashMap::new(),
        }
    }

    /// Adds `quantity` units of `name`, accumulating with any existing
    /// line. Zero is accepted and leaves the priced total unchanged
    /// (it still creates the line).
    pub fn add(&mut self, name: impl Into<String>, quantity: u32) {
        *self.lines.entry(name.into()).or_insert(0) += quantity;
    }

    /// Adds a single unit of `name`.
    pub fn add_one(&mut self, name: impl Into<String>) {
        self.add(name, 1);
    }

    /// Current quantity of `name` in the cart (zero when absent).
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.lines.get(name).copied().unwrap_or(0)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Prices the cart under the supplied discount rules.
    ///
    /// Per line, every rule targeting that ingredient produces a candidate
    /// price; the undiscounted price is always a candidate too, so a rule
    /// can only ever lower the charge. The minimum candidate is charged
    /// and the line charges are summed.
    ///
    /// Pure and idempotent: reads cart and catalog state only. Cost is
    /// O(lines × rules).
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::catalog::Catalog;
    /// use pantry_core::cart::Cart;
    /// use pantry_core::discount::BulkDiscount;
    /// use pantry_core::money::Money;
    ///
    /// let catalog = Catalog::build([("pepper", "1.6")]).unwrap();
    /// let mut cart = Cart::new(&catalog);
    /// cart.add("pepper", 7);
    ///
    /// assert_eq!(cart.total(&[]), Money::from_cents(1120));
    ///
    /// let bulk = BulkDiscount::new("pepper", 3, 1).unwrap();
    /// assert_eq!(cart.total(&[&bulk]), Money::from_cents(960));
    /// ```
    pub fn total(&self, discounts: &[&dyn Discount]) -> Money {
        self.lines
            .iter()
            .map(|(name, &quantity)| {
                let unit_price = self.catalog.price_of(name);
                let baseline = unit_price * quantity;

                discounts
                    .iter()
                    .filter(|rule| rule.ingredient() == name)
                    .map(|rule| rule.line_total(quantity, unit_price))
                    .chain(std::iter::once(baseline))
                    .min()
                    .unwrap_or(baseline)
            })
            .sum()
    }
}

/// Diagnostic rendering of the quantity map, sorted by name for stable
/// output. Not a machine contract.
impl fmt::Display for Cart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<_> = self.lines.iter().collect();
        lines.sort_by_key(|(name, _)| name.as_str());

        write!(f, "Cart: {{")?;
        for (i, (name, quantity)) in lines.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, quantity)?;
        }
        write!(f, "}}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::{BulkDiscount, NoDiscount};

    fn sample_catalog() -> Catalog {
        Catalog::build([
            ("tomatoes", "3.2"),
            ("rice", "2.8"),
            ("pepper", "1.6"),
            ("onions", "1.25"),
            ("chicken", "4.5"),
        ])
        .unwrap()
    }

    #[test]
    fn test_add_accumulates() {
        let catalog = sample_catalog();
        let mut cart = Cart::new(&catalog);

        cart.add_one("pepper");
        assert_eq!(cart.quantity_of("pepper"), 1);

        cart.add("pepper", 6);
        assert_eq!(cart.quantity_of("pepper"), 7);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total_without_discounts() {
        let catalog = sample_catalog();
        let mut cart = Cart::new(&catalog);

        cart.add_one("pepper");
        assert_eq!(cart.total(&[]), Money::from_cents(160));

        cart.add("pepper", 6);
        assert_eq!(cart.total(&[]), Money::from_cents(1120)); // 7 × 1.60

        cart.add_one("onions");
        cart.add("chicken", 4);
        // 11.20 + 1.25 + 18.00
        assert_eq!(cart.total(&[]), Money::from_cents(3045));
    }

    #[test]
    fn test_total_with_discounts() {
        let catalog = sample_catalog();
        let mut cart = Cart::new(&catalog);
        cart.add("pepper", 7);
        cart.add_one("onions");
        cart.add("chicken", 4);

        // Rules that change nothing
        let no_pepper = NoDiscount::new("pepper");
        let no_onions = NoDiscount::new("onions");
        assert_eq!(
            cart.total(&[&no_pepper, &no_onions]),
            Money::from_cents(3045)
        );

        // A rule for an ingredient whose quantity never completes a group
        let bulk_onions = BulkDiscount::new("onions", 3, 1).unwrap();
        assert_eq!(
            cart.total(&[&no_pepper, &bulk_onions]),
            Money::from_cents(3045)
        );

        // pepper: 7 at 1.60, buy 3 get 1 free => 9.60
        let bulk_pepper = BulkDiscount::new("pepper", 3, 1).unwrap();
        assert_eq!(
            cart.total(&[&no_pepper, &bulk_pepper]),
            Money::from_cents(960 + 125 + 1800)
        );

        // chicken: 4 at 4.50, buy 2 get 1 free => 13.50
        let bulk_chicken = BulkDiscount::new("chicken", 2, 1).unwrap();
        assert_eq!(
            cart.total(&[&no_pepper, &bulk_pepper, &bulk_chicken]),
            Money::from_cents(2435) // 9.60 + 1.25 + 13.50
        );
    }

    #[test]
    fn test_same_ingredient_rules_are_alternatives_not_stacked() {
        let catalog = sample_catalog();
        let mut cart = Cart::new(&catalog);
        cart.add("pepper", 8);

        // Two bulk rules for pepper: the cheaper one wins, they never combine
        let three_one = BulkDiscount::new("pepper", 3, 1).unwrap(); // 6 charged
        let one_one = BulkDiscount::new("pepper", 1, 1).unwrap(); // 4 charged
        assert_eq!(
            cart.total(&[&three_one, &one_one]),
            Money::from_cents(4 * 160)
        );
    }

    #[test]
    fn test_discount_never_increases_total() {
        let catalog = sample_catalog();
        let mut cart = Cart::new(&catalog);
        cart.add("rice", 5);

        let undiscounted = cart.total(&[]);
        let rule = BulkDiscount::new("rice", 9, 1).unwrap();
        assert_eq!(cart.total(&[&rule]), undiscounted);
    }

    #[test]
    fn test_rule_for_absent_ingredient_is_noop() {
        let catalog = sample_catalog();
        let mut cart = Cart::new(&catalog);
        cart.add("pepper", 7);

        let rule = BulkDiscount::new("tomatoes", 1, 1).unwrap();
        assert_eq!(cart.total(&[&rule]), cart.total(&[]));
    }

    #[test]
    fn test_unknown_ingredient_contributes_zero() {
        let catalog = sample_catalog();
        let mut cart = Cart::new(&catalog);
        cart.add("saffron", 12);

        assert_eq!(cart.total(&[]), Money::zero());

        // Even with a rule targeting it
        let rule = BulkDiscount::new("saffron", 2, 1).unwrap();
        assert_eq!(cart.total(&[&rule]), Money::zero());
    }

    #[test]
    fn test_zero_quantity_line_is_free() {
        let catalog = sample_catalog();
        let mut cart = Cart::new(&catalog);
        cart.add("pepper", 0);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(&[]), Money::zero());
    }

    #[test]
    fn test_total_is_idempotent() {
        let catalog = sample_catalog();
        let mut cart = Cart::new(&catalog);
        cart.add("pepper", 7);

        let first = cart.total(&[]);
        assert_eq!(cart.total(&[]), first);
        assert_eq!(cart.quantity_of("pepper"), 7);
    }

    #[test]
    fn test_one_catalog_backs_many_carts() {
        let catalog = sample_catalog();
        let mut a = Cart::new(&catalog);
        let mut b = Cart::new(&catalog);

        a.add("pepper", 1);
        b.add("chicken", 2);

        assert_eq!(a.total(&[]), Money::from_cents(160));
        assert_eq!(b.total(&[]), Money::from_cents(900));
    }

    #[test]
    fn test_display() {
        let catalog = sample_catalog();
        let mut cart = Cart::new(&catalog);
        cart.add("pepper", 7);
        cart.add_one("onions");

        assert_eq!(cart.to_string(), "Cart: {onions: 1, pepper: 7}");
    }
}
