//! # pantry-store: Catalog File Loading for Pantry
//!
//! This crate provides the one I/O capability the pricing engine needs:
//! building a [`pantry_core::Catalog`] from a comma-delimited file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pantry Data Flow                                 │
//! │                                                                         │
//! │  store.csv ──► load_catalog() ──► Catalog ──► Cart::total()            │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │             CatalogLoadError                                            │
//! │             (path and line context for every failure)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`loader`] - CSV reading and catalog construction
//! - [`error`] - Load error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pantry_core::Cart;
//! use pantry_store::load_catalog;
//!
//! let catalog = load_catalog("store.csv")?;
//! let mut cart = Cart::new(&catalog);
//! cart.add("pepper", 7);
//! println!("total: {}", cart.total(&[]));
//! # Ok::<(), pantry_store::CatalogLoadError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod loader;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::CatalogLoadError;
pub use loader::{load_catalog, read_catalog};
