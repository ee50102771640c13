//! # Catalog Module
//!
//! The immutable ingredient price catalog.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Lifecycle                                  │
//! │                                                                         │
//! │  (name, price-text) pairs ──► Catalog::build() ──► read-only Catalog   │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                         parse failure = build failure                   │
//! │                         (malformed prices never enter the catalog)     │
//! │                                                                         │
//! │  Catalog::price_of("pepper") ──► 1.60                                  │
//! │  Catalog::price_of("salt")   ──► 0.00  (not stocked means free)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Unknown Ingredients Price at Zero
//! This is deliberate business policy, not a silent fallback: an ingredient
//! the store does not stock costs nothing. [`Catalog::get`] exposes the
//! explicit `Option` lookup; the zero collapse happens only in
//! [`Catalog::price_of`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Catalog
// =============================================================================

/// Immutable mapping from ingredient name to unit price.
///
/// ## Invariants
/// - Every stored price is non-negative (enforced by [`Catalog::build`])
/// - Read-only after construction; no mutation API exists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    prices: HashMap<String, Money>,
}

impl Catalog {
    /// Builds a catalog from (name, price-text) pairs.
    ///
    /// Price text is parsed as decimal money (`"1.6"` → 1.60). Duplicate
    /// names overwrite: the last occurrence wins, plain mapping semantics.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidPrice`] when a price text does not parse
    /// - [`CoreError::NegativePrice`] when a price parses below zero
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::catalog::Catalog;
    /// use pantry_core::money::Money;
    ///
    /// let catalog = Catalog::build([("pepper", "1.6"), ("onions", "1.25")]).unwrap();
    /// assert_eq!(catalog.price_of("pepper"), Money::from_cents(160));
    /// ```
    pub fn build<I, N, P>(entries: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: AsRef<str>,
    {
        let mut prices = HashMap::new();

        for (name, text) in entries {
            let name = name.into();
            let price: Money =
                text.as_ref()
                    .parse()
                    .map_err(|source| CoreError::InvalidPrice {
                        name: name.clone(),
                        source,
                    })?;
            if price.is_negative() {
                return Err(CoreError::NegativePrice { name, price });
            }
            prices.insert(name, price);
        }

        Ok(Catalog { prices })
    }

    /// Explicit price lookup: `None` when the ingredient is not stocked.
    #[inline]
    pub fn get(&self, name: &str) -> Option<Money> {
        self.prices.get(name).copied()
    }

    /// Price lookup with the "not stocked means free" policy applied.
    ///
    /// Returns [`Money::zero`] for unknown names. This is the only place
    /// absence collapses to zero; callers who need to distinguish use
    /// [`Catalog::get`].
    #[inline]
    pub fn price_of(&self, name: &str) -> Money {
        self.get(name).unwrap_or_default()
    }

    /// Number of priced ingredients.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Checks whether the catalog holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Iterates over (name, price) entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.prices.iter().map(|(name, &price)| (name.as_str(), price))
    }
}

/// Diagnostic rendering of the price map, sorted by name for stable output.
impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.prices.iter().collect();
        entries.sort_by_key(|(name, _)| name.as_str());

        write!(f, "Catalog: {{")?;
        for (i, (name, price)) in entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, price)?;
        }
        write!(f, "}}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
