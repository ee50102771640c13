//! # pantry-core: Pure Pricing Logic for Pantry
//!
//! This crate is the **heart** of Pantry. It prices a shopping cart of
//! named ingredients against a price catalog, with optional per-ingredient
//! discount rules, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pantry Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Host (CLI, service, test harness)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pantry-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  catalog  │  │ discount  │  │   cart    │  │   │
//! │  │   │   Money   │  │  Catalog  │  │ NoDiscount│  │   Cart    │  │   │
//! │  │   │  parsing  │  │  price_of │  │ BulkDisc. │  │ add/total │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 pantry-store (catalog file loading)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cent arithmetic (no floating point!)
//! - [`catalog`] - Immutable name → price mapping with zero-default lookup
//! - [`discount`] - Discount capability and its rule implementations
//! - [`cart`] - Quantity multiset with the best-price totalling policy
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every pricing query is deterministic and
//!    side-effect free
//! 2. **No I/O**: File, network, and database access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are cents (i64), never floats
//! 4. **Fail at Construction**: Malformed prices and invalid discount
//!    parameters are rejected before any pricing math runs; pricing itself
//!    is infallible
//!
//! ## Example Usage
//!
//! ```rust
//! use pantry_core::{BulkDiscount, Cart, Catalog, Money};
//!
//! let catalog = Catalog::build([
//!     ("pepper", "1.6"),
//!     ("onions", "1.25"),
//!     ("chicken", "4.5"),
//! ])?;
//!
//! let mut cart = Cart::new(&catalog);
//! cart.add("pepper", 7);
//! cart.add_one("onions");
//! cart.add("chicken", 4);
//!
//! // 7×1.60 + 1×1.25 + 4×4.50
//! assert_eq!(cart.total(&[]), Money::from_cents(3045));
//!
//! // Best price per line among applicable rules and the baseline
//! let pepper_bulk = BulkDiscount::new("pepper", 3, 1)?;
//! let chicken_bulk = BulkDiscount::new("chicken", 2, 1)?;
//! assert_eq!(
//!     cart.total(&[&pepper_bulk, &chicken_bulk]),
//!     Money::from_cents(2435)
//! );
//! # Ok::<(), pantry_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod discount;
pub mod error;
pub mod money;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pantry_core::Cart` instead of
// `use pantry_core::cart::Cart`

pub use cart::Cart;
pub use catalog::Catalog;
pub use discount::{BulkDiscount, Discount, NoDiscount};
pub use error::{CoreError, CoreResult};
pub use money::{Money, ParseMoneyError};
