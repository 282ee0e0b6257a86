//! # farm-store: Session Layer for FarmCart
//!
//! Everything the presentation surfaces of the storefront talk to:
//!
//! - [`store::CartStore`] - thread-safe owner of the session cart
//! - [`catalog::Catalog`] - the read-only mock product feed with
//!   filter/sort/pagination queries and suggestion picks
//! - [`checkout::Checkout`] - the simulated payment collaborator (artificial
//!   delay, hard-coded success, receipt + implicit cart clear)
//! - [`error::StoreError`] - unified error with machine-readable codes
//!
//! All business rules live below this crate in `farm-core`; this layer adds
//! shared state, logging and the one piece of async (the checkout timer).
//!
//! ## Example
//! ```rust
//! use farm_store::{Catalog, CartStore};
//!
//! let catalog = Catalog::demo();
//! let store = CartStore::new();
//!
//! store.add_from_catalog(&catalog, "honey", 1)?;
//! assert_eq!(store.item_count(), 1);
//! # Ok::<(), farm_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod store;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, Page, ProductQuery, SortKey};
pub use checkout::{Checkout, Receipt, Shopper};
pub use error::{ErrorCode, ErrorResponse, StoreError, StoreResult};
pub use store::{CartStore, CartView};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// Respects `RUST_LOG`; defaults to `info` globally with `debug` for the
/// farm crates. Call once from the embedding application, not from library
/// code.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,farm_store=debug,farm_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
