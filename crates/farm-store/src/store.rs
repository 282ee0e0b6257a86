//! # Cart Store
//!
//! Session-scoped cart state shared by every presentation surface.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>`:
//! 1. Several surfaces (header badge, cart page, product cards) hold the
//!    same store
//! 2. Only one mutation runs at a time
//! 3. Readers between mutations observe a consistent snapshot
//!
//! ## Ownership
//! The store is the sole owner of the cart. Surfaces never touch line items
//! directly; they call the methods below and read the returned [`CartView`].

use std::sync::{Arc, Mutex};

use farm_core::cart::{Cart, LineItem, OrderSummary};
use farm_core::{Money, Product};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{StoreError, StoreResult};

// =============================================================================
// Cart View DTO
// =============================================================================

/// Cart snapshot handed to the UI after every operation: the ordered line
/// items plus the recomputed order summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<LineItem>,
    pub summary: OrderSummary,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            items: cart.items.clone(),
            summary: cart.summary(),
        }
    }
}

// =============================================================================
// Cart Store
// =============================================================================

/// Thread-safe owner of the session cart.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    cart: Arc<Mutex<Cart>>,
}

impl CartStore {
    /// Creates a store with an empty cart (session start).
    pub fn new() -> Self {
        CartStore {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a closure with read access to the cart.
    ///
    /// ```rust,ignore
    /// let badge = store.with_cart(|c| c.item_count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Executes a closure with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart)
    }

    // -------------------------------------------------------------------------
    // Operations invoked from UI event handlers
    // -------------------------------------------------------------------------

    /// Current cart contents (read only).
    pub fn view(&self) -> CartView {
        self.with_cart(|c| CartView::from(c))
    }

    /// Adds a product to the cart.
    pub fn add_item(&self, product: &Product, quantity: i64) -> StoreResult<CartView> {
        debug!(product_id = %product.id, quantity, "add_item");

        self.with_cart_mut(|c| {
            c.add_item(product, quantity)?;
            Ok(CartView::from(&*c))
        })
    }

    /// Looks a product up in the catalog feed and adds it.
    ///
    /// This is the path the product cards take: they only know the id.
    pub fn add_from_catalog(
        &self,
        catalog: &Catalog,
        product_id: &str,
        quantity: i64,
    ) -> StoreResult<CartView> {
        let product = catalog
            .get(product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))?;

        self.add_item(product, quantity)
    }

    /// Replaces the quantity of an existing line item. Requests below 1 are
    /// ignored (the UI calls [`CartStore::remove_item`] for removal).
    pub fn update_quantity(&self, product_id: &str, quantity: i64) -> StoreResult<CartView> {
        debug!(product_id = %product_id, quantity, "update_quantity");

        self.with_cart_mut(|c| {
            c.update_quantity(product_id, quantity)?;
            Ok(CartView::from(&*c))
        })
    }

    /// Removes a line item. Idempotent.
    pub fn remove_item(&self, product_id: &str) -> CartView {
        debug!(product_id = %product_id, "remove_item");

        self.with_cart_mut(|c| {
            c.remove_item(product_id);
            CartView::from(&*c)
        })
    }

    /// Empties the cart and its coupon slot.
    pub fn clear(&self) -> CartView {
        debug!("clear_cart");

        self.with_cart_mut(|c| {
            c.clear();
            CartView::from(&*c)
        })
    }

    /// Applies a coupon code; returns the discount granted.
    pub fn apply_coupon(&self, code: &str) -> StoreResult<Money> {
        debug!(code = %code, "apply_coupon");

        self.with_cart_mut(|c| Ok(c.apply_coupon(code)?))
    }

    /// Header badge number: total quantity across the cart.
    pub fn item_count(&self) -> i64 {
        self.with_cart(|c| c.item_count())
    }

    /// Current order summary.
    pub fn summary(&self) -> OrderSummary {
        self.with_cart(|c| c.summary())
    }

    /// Whether the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.with_cart(|c| c.is_empty())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
