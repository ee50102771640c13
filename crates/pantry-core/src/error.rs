//! # Error Types
//!
//! Domain-specific error types for pantry-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pantry-core errors (this file)                                        │
//! │  └── CoreError        - Catalog/discount construction failures         │
//! │                                                                         │
//! │  pantry-store errors (separate crate)                                  │
//! │  └── CatalogLoadError - File reading and row parsing failures          │
//! │                                                                         │
//! │  Flow: ParseMoneyError → CoreError → CatalogLoadError → caller         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (ingredient name, offending text)
//! 3. Errors are enum variants, never String
//! 4. Everything fails at construction time; pricing itself cannot fail

use thiserror::Error;

use crate::money::{Money, ParseMoneyError};

// =============================================================================
// Core Error
// =============================================================================

/// Pricing-domain errors.
///
/// All variants are construction-time failures: once a `Catalog` and the
/// discount rules exist, every pricing query is infallible.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A catalog entry's price text does not parse as a decimal number.
    ///
    /// ## When This Occurs
    /// - Non-numeric text in the price column of a catalog source
    /// - More fraction digits than integer-cent money can hold
    #[error("invalid price for '{name}': {source}")]
    InvalidPrice {
        name: String,
        #[source]
        source: ParseMoneyError,
    },

    /// A catalog entry's price parsed, but is negative.
    ///
    /// Catalog prices must be non-negative; negative `Money` is reserved
    /// for arithmetic results, never for stocked prices.
    #[error("negative price for '{name}': {price}")]
    NegativePrice { name: String, price: Money },

    /// A bulk discount was constructed with `buy + free == 0`.
    ///
    /// The group size `buy + free` is the divisor of the bulk calculation,
    /// so it must be at least 1.
    #[error("bulk discount for '{ingredient}': buy + free must be at least 1")]
    InvalidDiscountParameter { ingredient: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidPrice {
            name: "pepper".to_string(),
            source: ParseMoneyError::InvalidDigit {
                text: "cheap".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "invalid price for 'pepper': 'cheap' is not a decimal number"
        );

        let err = CoreError::NegativePrice {
            name: "onions".to_string(),
            price: Money::from_cents(-125),
        };
        assert_eq!(err.to_string(), "negative price for 'onions': -1.25");

        let err = CoreError::InvalidDiscountParameter {
            ingredient: "chicken".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "bulk discount for 'chicken': buy + free must be at least 1"
        );
    }

    #[test]
    fn test_parse_error_is_source() {
        let err = CoreError::InvalidPrice {
            name: "rice".to_string(),
            source: ParseMoneyError::Empty,
        };
        let source = std::error::Error::source(&err).expect("source attached");
        assert_eq!(source.to_string(), "price text is empty");
    }
}
