//! # farm-core: Pure Business Logic for FarmCart
//!
//! This crate is the heart of the FarmCart storefront. It contains the cart
//! aggregate and its derived-pricing rules as pure, I/O-free code.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      FarmCart Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 Presentation Surfaces (out of scope)          │  │
//! │  │   Header badge ── Product cards ── Cart page ── Summary       │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │                 farm-store (session layer)                    │  │
//! │  │   CartStore, Catalog feed, simulated Checkout                 │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │               ★ farm-core (THIS CRATE) ★                      │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │  │
//! │  │  │  types  │ │  money  │ │  cart   │ │ pricing │ │validate │  │  │
//! │  │  │ Product │ │  Money  │ │  Cart   │ │shipping │ │  rules  │  │  │
//! │  │  │ TaxRate │ │  cents  │ │LineItem │ │tax/total│ │  checks │  │  │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │  │
//! │  │                                                               │  │
//! │  │  NO I/O • NO ASYNC • NO LOGGING • PURE FUNCTIONS              │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: same input, same output; derived totals are
//!    recomputed from the current items on every read, never cached
//! 2. **Integer money**: all monetary values are cents (i64), never floats
//! 3. **Explicit errors**: every failure is a typed [`CartError`] variant
//! 4. **All-or-nothing mutations**: a failing operation leaves the cart
//!    untouched
//!
//! ## Example
//!
//! ```rust
//! use farm_core::cart::Cart;
//! use farm_core::types::{Category, Product, Season};
//!
//! let honey = Product {
//!     id: "honey".into(),
//!     name: "Organic Honey".into(),
//!     description: None,
//!     category: Category::Other,
//!     price_cents: 1299,
//!     original_price_cents: None,
//!     unit: Some("jar".into()),
//!     image: None,
//!     organic: true,
//!     seasonal: Season::All,
//!     rating: 4.8,
//!     review_count: 156,
//!     stock: Some(18),
//!     tags: vec!["raw".into()],
//!     popularity: 88,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_item(&honey, 2)?;
//!
//! let summary = cart.summary();
//! assert_eq!(summary.subtotal.cents(), 2598);
//! # Ok::<(), farm_core::error::CartError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, Coupon, LineItem, OrderSummary};
pub use error::{CartError, CartResult};
pub use money::Money;
pub use types::{Category, Product, Season, TaxRate};
