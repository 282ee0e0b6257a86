//! # Simulated Checkout
//!
//! The "payment" collaborator. There is no payment processor behind it:
//! it waits an artificial delay and then succeeds unconditionally, which is
//! exactly what the storefront simulates with its checkout timer.
//!
//! ## Checkout Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Lifecycle                               │
//! │                                                                     │
//! │  ┌──────────┐    ┌───────────┐    ┌───────────┐    ┌──────────┐     │
//! │  │ In Cart  │───►│ Pre-flight│───►│ Simulated │───►│ Receipt  │     │
//! │  │          │    │ checks    │    │ delay     │    │ + clear  │     │
//! │  └──────────┘    └───────────┘    └───────────┘    └──────────┘     │
//! │                       │                                             │
//! │                       ├── no shopper? → SignInRequired              │
//! │                       └── empty cart? → CartEmpty                   │
//! │                                                                     │
//! │  Success path is hard-coded; the only failures are pre-flight.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use chrono::{DateTime, Utc};
use farm_core::cart::{LineItem, OrderSummary};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::store::CartStore;

/// Delay the real storefront simulates before confirming an order.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_secs(2);

// =============================================================================
// Shopper Stub
// =============================================================================

/// Stub user object. Checkout only cares whether one is present; there is
/// no authentication behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shopper {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Shopper {
    /// A demo shopper for manual runs and tests.
    pub fn demo() -> Self {
        Shopper {
            id: Uuid::new_v4().to_string(),
            name: "Demo Shopper".to_string(),
            email: "demo@farmcart.test".to_string(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Order confirmation produced by a successful checkout. Line items and the
/// summary are frozen copies; the live cart is cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Generated order number, e.g. `ORD-1A2B3C4D`.
    pub order_number: String,

    /// When the simulated payment completed.
    pub placed_at: DateTime<Utc>,

    /// Shopper the order belongs to.
    pub shopper_id: String,

    /// Snapshot of the purchased lines.
    pub items: Vec<LineItem>,

    /// Frozen order summary (what was charged).
    pub summary: OrderSummary,
}

fn generate_order_number() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("ORD-{}", id[..8].to_uppercase())
}

// =============================================================================
// Checkout
// =============================================================================

/// The simulated checkout collaborator.
#[derive(Debug, Clone)]
pub struct Checkout {
    delay: Duration,
}

impl Default for Checkout {
    fn default() -> Self {
        Checkout::new()
    }
}

impl Checkout {
    /// Checkout with the storefront's default 2 s processing delay.
    pub fn new() -> Self {
        Checkout {
            delay: DEFAULT_PROCESSING_DELAY,
        }
    }

    /// Checkout with a custom delay. Tests pass `Duration::ZERO`.
    pub fn with_delay(delay: Duration) -> Self {
        Checkout { delay }
    }

    /// Runs the simulated checkout against the session cart.
    ///
    /// ## Behavior
    /// 1. Pre-flight: a shopper must be present and the cart non-empty
    /// 2. Sleeps the artificial processing delay
    /// 3. Freezes the cart into a [`Receipt`] and clears it, atomically
    ///    under the cart lock
    ///
    /// ## Errors
    /// - [`StoreError::SignInRequired`] with no shopper
    /// - [`StoreError::CartEmpty`] on an empty cart
    pub async fn process(
        &self,
        store: &CartStore,
        shopper: Option<&Shopper>,
    ) -> StoreResult<Receipt> {
        let shopper = shopper.ok_or(StoreError::SignInRequired)?;

        if store.is_empty() {
            return Err(StoreError::CartEmpty);
        }

        debug!(delay_ms = self.delay.as_millis() as u64, "processing payment");
        tokio::time::sleep(self.delay).await;

        // Freeze and clear under one lock so no mutation can slip between
        // the snapshot and the clear.
        let receipt = store.with_cart_mut(|cart| {
            if cart.is_empty() {
                return Err(StoreError::CartEmpty);
            }

            let receipt = Receipt {
                order_number: generate_order_number(),
                placed_at: Utc::now(),
                shopper_id: shopper.id.clone(),
                items: cart.items.clone(),
                summary: cart.summary(),
            };
            cart.clear();
            Ok(receipt)
        })?;

        info!(
            order_number = %receipt.order_number,
            total_cents = receipt.summary.total.cents(),
            "order placed"
        );
        Ok(receipt)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn instant_checkout() -> Checkout {
        Checkout::with_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_checkout_success_clears_cart() {
        let catalog = Catalog::demo();
        let store = CartStore::new();
        store.add_from_catalog(&catalog, "tomatoes", 1).unwrap();
        store.add_from_catalog(&catalog, "carrots", 2).unwrap();

        let shopper = Shopper::demo();
        let receipt = instant_checkout()
            .process(&store, Some(&shopper))
            .await
            .unwrap();

        assert!(receipt.order_number.starts_with("ORD-"));
        assert_eq!(receipt.shopper_id, shopper.id);
        assert_eq!(receipt.items.len(), 2);
        // 499 + 349*2 = 1197; + 599 shipping + 96 tax
        assert_eq!(receipt.summary.total.cents(), 1892);

        // Clear is implicit on success; derived reads go to zero.
        assert!(store.is_empty());
        assert_eq!(store.item_count(), 0);
    }

    #[tokio::test]
    async fn test_checkout_requires_shopper() {
        let catalog = Catalog::demo();
        let store = CartStore::new();
        store.add_from_catalog(&catalog, "honey", 1).unwrap();

        let err = instant_checkout().process(&store, None).await.unwrap_err();
        assert_eq!(err, StoreError::SignInRequired);

        // Cart is untouched by a failed checkout.
        assert_eq!(store.item_count(), 1);
    }

    #[tokio::test]
    async fn test_checkout_rejects_empty_cart() {
        let store = CartStore::new();
        let shopper = Shopper::demo();

        let err = instant_checkout()
            .process(&store, Some(&shopper))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::CartEmpty);
    }

    #[test]
    fn test_order_numbers_are_prefixed_and_distinct() {
        let a = generate_order_number();
        let b = generate_order_number();

        assert!(a.starts_with("ORD-"));
        assert_eq!(a.len(), "ORD-".len() + 8);
        assert_ne!(a, b);
    }
}
