//! # Cart Aggregate
//!
//! The authoritative set of line items for the current browsing session,
//! plus its derived monetary aggregates.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                  │
//! │                                                                     │
//! │  UI Action               Operation              State Change        │
//! │  ─────────               ─────────              ────────────        │
//! │  Click "Add to Cart" ──► add_item()      ─────► merge or push       │
//! │  Change quantity     ──► update_quantity() ───► items[i].qty = n    │
//! │  Click remove        ──► remove_item()   ─────► items.retain(..)    │
//! │  Click "Clear Cart"  ──► clear()         ─────► items + coupon gone │
//! │  Apply coupon        ──► apply_coupon()  ─────► coupon slot filled  │
//! │  Render summary      ──► summary()       ─────► (read only)         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Exactly one line item per distinct product id (adding an existing id
//!   increments quantity, never duplicates)
//! - `quantity >= 1` on every line item at all times
//! - Insertion order is the display order and stays stable across updates
//! - Derived values are recomputed from scratch on every read; nothing is
//!   cached, so they can never go stale
//! - At most one coupon is active; it survives until `clear()` or
//!   `reset_coupon()`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::pricing;
use crate::types::Product;
use crate::validation::{validate_item, validate_quantity};

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the cart.
///
/// ## Price Freezing
/// `unit_price` (and `original_unit_price`) are captured when the item is
/// added. If the catalog price changes afterwards, the cart keeps charging
/// what the customer saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product id this line aggregates. Unique within the cart.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price charged per unit at time of adding (frozen).
    pub unit_price: Money,

    /// Pre-discount price per unit, when the product was on sale.
    pub original_unit_price: Option<Money>,

    /// Quantity in cart. Always >= 1.
    pub quantity: i64,

    /// Display-only unit label ("lb", "dozen"). Not used in arithmetic.
    pub unit: Option<String>,

    /// Display-only image URL.
    pub image: Option<String>,

    /// Display-only category label.
    pub category: String,

    /// Display-only organic badge.
    pub organic: bool,

    /// Stock ceiling carried from the product, if tracked. Quantity is
    /// clamped to this on add.
    pub stock_ceiling: Option<i64>,

    /// When this item was first added to the cart.
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Freezes a product into a line item with the given quantity.
    fn from_product(product: &Product, quantity: i64) -> Self {
        LineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price(),
            original_unit_price: product.original_price(),
            quantity,
            unit: product.unit.clone(),
            image: product.image.clone(),
            category: product.category.to_string(),
            organic: product.organic,
            stock_ceiling: product.stock,
            added_at: Utc::now(),
        }
    }

    /// Line total: unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Saving on this line: `(original - current) × quantity` when a higher
    /// original price is listed, otherwise zero.
    pub fn line_savings(&self) -> Money {
        match self.original_unit_price {
            Some(original) if original > self.unit_price => {
                (original - self.unit_price).multiply_quantity(self.quantity)
            }
            _ => Money::zero(),
        }
    }

    /// Clamps a requested quantity to the stock ceiling, if one is tracked.
    fn clamp_to_stock(&self, requested: i64) -> i64 {
        match self.stock_ceiling {
            Some(ceiling) => requested.min(ceiling),
            None => requested,
        }
    }
}

// =============================================================================
// Coupon Slot
// =============================================================================

/// The cart's single coupon slot.
///
/// Modeled as a tagged optional rather than a bool + amount, so the two
/// states are explicit and "discount > 0 while not applied" cannot exist.
///
/// ```text
/// NoCoupon ──(valid code)──► Applied { code, discount }
///    ▲                            │
///    └──── clear / reset_coupon ──┘
/// ```
/// There is no replace transition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Coupon {
    /// No coupon active.
    #[default]
    NoCoupon,

    /// A coupon was accepted. `discount` was computed from the subtotal at
    /// application time and is not recomputed as the cart changes.
    #[serde(rename_all = "camelCase")]
    Applied { code: String, discount: Money },
}

impl Coupon {
    /// The discount this slot contributes to the total (zero when empty).
    pub fn discount(&self) -> Money {
        match self {
            Coupon::NoCoupon => Money::zero(),
            Coupon::Applied { discount, .. } => *discount,
        }
    }

    /// True when a coupon is active.
    pub fn is_applied(&self) -> bool {
        matches!(self, Coupon::Applied { .. })
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered collection of line items plus one coupon
/// slot.
///
/// All mutation funnels through the explicit methods below; every mutation
/// either fully succeeds or fails without touching state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Line items in insertion order (the display order).
    pub items: Vec<LineItem>,

    /// The coupon slot.
    pub coupon: Coupon,

    /// When the cart was created or last cleared.
    pub created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            coupon: Coupon::NoCoupon,
            created_at: Utc::now(),
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds a product to the cart, or increases quantity if already present.
    ///
    /// ## Behavior
    /// - Descriptor and quantity are validated first; nothing mutates on
    ///   failure
    /// - Same id already in cart: quantity increases by `quantity`, clamped
    ///   to the product's stock ceiling when one is listed
    /// - Otherwise a new line item is appended (quantity likewise clamped)
    ///
    /// ## Errors
    /// - [`CartError::InvalidItem`] for an empty id/name or negative price
    /// - [`CartError::InvalidQuantity`] when `quantity < 1`
    /// - [`CartError::OutOfStock`] when the stock ceiling is below 1, so the
    ///   clamp could never leave a valid quantity
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CartResult<()> {
        validate_item(product)?;
        validate_quantity(quantity)?;

        // A ceiling below 1 would clamp the quantity under the >= 1
        // invariant and leave a phantom line; reject before mutating.
        if matches!(product.stock, Some(ceiling) if ceiling < 1) {
            return Err(CartError::OutOfStock(product.id.clone()));
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity = item.clamp_to_stock(item.quantity + quantity);
            return Ok(());
        }

        let mut item = LineItem::from_product(product, quantity);
        item.quantity = item.clamp_to_stock(quantity);
        self.items.push(item);
        Ok(())
    }

    /// Replaces the quantity of an existing line item.
    ///
    /// ## Behavior
    /// - `new_quantity < 1` is a deliberate no-op: the UI is expected to
    ///   call [`Cart::remove_item`] instead of zeroing a quantity, and
    ///   decrease requests below 1 are silently ignored
    /// - Otherwise the quantity is replaced wholesale
    ///
    /// ## Errors
    /// - [`CartError::ItemNotFound`] when no line item has `id`
    pub fn update_quantity(&mut self, id: &str, new_quantity: i64) -> CartResult<()> {
        if new_quantity < 1 {
            return Ok(());
        }

        match self.items.iter_mut().find(|i| i.product_id == id) {
            Some(item) => {
                item.quantity = new_quantity;
                Ok(())
            }
            None => Err(CartError::ItemNotFound(id.to_string())),
        }
    }

    /// Removes the line item with the given id, if present.
    ///
    /// Removing an absent id is a harmless no-op (idempotent).
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.product_id != id);
    }

    /// Empties the cart unconditionally: items and coupon slot. Idempotent.
    pub fn clear(&mut self) {
        self.items.clear();
        self.coupon = Coupon::NoCoupon;
        self.created_at = Utc::now();
    }

    // -------------------------------------------------------------------------
    // Coupon
    // -------------------------------------------------------------------------

    /// Applies a coupon code to the cart.
    ///
    /// The code is matched case-insensitively against the one recognized
    /// value. On match the discount is fixed at 10% of the subtotal *at
    /// application time* and the slot moves to `Applied`.
    ///
    /// ## Errors
    /// - [`CartError::CouponAlreadyApplied`] while a coupon is active
    /// - [`CartError::CouponInvalid`] for a non-matching code
    ///
    /// ## Returns
    /// The discount amount granted.
    pub fn apply_coupon(&mut self, code: &str) -> CartResult<Money> {
        if let Coupon::Applied { code: active, .. } = &self.coupon {
            return Err(CartError::CouponAlreadyApplied(active.clone()));
        }

        if !pricing::coupon_matches(code) {
            return Err(CartError::CouponInvalid(code.to_string()));
        }

        let discount = pricing::coupon_discount(self.subtotal());
        self.coupon = Coupon::Applied {
            code: code.trim().to_uppercase(),
            discount,
        };
        Ok(discount)
    }

    /// Explicitly empties the coupon slot.
    pub fn reset_coupon(&mut self) {
        self.coupon = Coupon::NoCoupon;
    }

    // -------------------------------------------------------------------------
    // Derived Reads (pure, recomputed each call - no caching)
    // -------------------------------------------------------------------------

    /// Total quantity across all line items (the header badge number).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct line items.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of `unit_price × quantity` over all line items.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Cumulative saving implied by original-vs-current price differences.
    pub fn savings(&self) -> Money {
        self.items.iter().map(|i| i.line_savings()).sum()
    }

    /// Discount from the coupon slot (zero when none is applied).
    pub fn discount(&self) -> Money {
        self.coupon.discount()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Computes the full order summary from the current state.
    pub fn summary(&self) -> OrderSummary {
        let subtotal = self.subtotal();
        let shipping = pricing::shipping_cost(subtotal);
        let tax = pricing::sales_tax(subtotal);
        let discount = self.discount();

        OrderSummary {
            item_count: self.item_count(),
            line_count: self.line_count(),
            subtotal,
            savings: self.savings(),
            shipping,
            tax,
            discount,
            total: pricing::order_total(subtotal, shipping, tax, discount),
        }
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// Order summary snapshot for rendering the totals panel and receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Total quantity across all lines.
    pub item_count: i64,

    /// Number of distinct lines.
    pub line_count: usize,

    /// Sum of line totals, before shipping/tax/discount.
    pub subtotal: Money,

    /// Cumulative original-price savings.
    pub savings: Money,

    /// Shipping cost (zero above the free-shipping threshold).
    pub shipping: Money,

    /// Sales tax on the subtotal.
    pub tax: Money,

    /// Coupon discount (zero with no coupon).
    pub discount: Money,

    /// Grand total: subtotal + shipping + tax - discount.
    pub total: Money,
}

impl From<&Cart> for OrderSummary {
    fn from(cart: &Cart) -> Self {
        cart.summary()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
