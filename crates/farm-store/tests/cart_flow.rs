//! End-to-end session flow: browse the catalog, fill the cart, apply the
//! coupon, check out, and come back to an empty cart.

use std::time::Duration;

use farm_core::{CartError, Money};
use farm_store::{Catalog, CartStore, Checkout, ProductQuery, Shopper, SortKey, StoreError};

#[tokio::test]
async fn full_shopping_session() {
    let catalog = Catalog::demo();
    let store = CartStore::new();
    let shopper = Shopper::demo();

    // Browse: cheapest vegetables first.
    let page = catalog.query(&ProductQuery {
        category: Some(farm_core::Category::Vegetables),
        sort: SortKey::PriceLow,
        ..Default::default()
    });
    assert_eq!(page.items[0].id, "carrots");

    // Fill the cart: tomatoes $4.99 × 1, carrots $3.49 × 2.
    store.add_from_catalog(&catalog, "tomatoes", 1).unwrap();
    store.add_from_catalog(&catalog, "carrots", 2).unwrap();

    let view = store.view();
    assert_eq!(view.summary.item_count, 3);
    assert_eq!(view.summary.subtotal.cents(), 1197);
    assert_eq!(view.summary.shipping.cents(), 599);
    assert_eq!(view.summary.tax.cents(), 96);
    // Tomatoes are on sale at $4.99 from $6.99.
    assert_eq!(view.summary.savings.cents(), 200);
    assert_eq!(view.summary.total.cents(), 1892);

    // Coupon: 10% of $11.97 → $1.20 off.
    let discount = store.apply_coupon("organic10").unwrap();
    assert_eq!(discount, Money::from_cents(120));
    assert_eq!(store.summary().total.cents(), 1772);

    // A second coupon is rejected until the slot is reset.
    assert!(matches!(
        store.apply_coupon("ORGANIC10"),
        Err(StoreError::Cart(CartError::CouponAlreadyApplied(_)))
    ));

    // Checkout (no artificial delay in tests).
    let receipt = Checkout::with_delay(Duration::ZERO)
        .process(&store, Some(&shopper))
        .await
        .unwrap();
    assert_eq!(receipt.summary.total.cents(), 1772);
    assert_eq!(receipt.items.len(), 2);

    // The session cart is empty again, coupon slot included.
    assert!(store.is_empty());
    assert_eq!(store.summary().discount, Money::zero());
    assert!(store.apply_coupon("ORGANIC10").is_ok());
}

#[tokio::test]
async fn quantity_edits_follow_the_ui_contract() {
    let catalog = Catalog::demo();
    let store = CartStore::new();

    store.add_from_catalog(&catalog, "eggs", 1).unwrap();

    // The minus button never goes below 1; the request is ignored.
    let view = store.update_quantity("eggs", 0).unwrap();
    assert_eq!(view.summary.item_count, 1);

    // Explicit removal is how a line leaves the cart.
    let view = store.remove_item("eggs");
    assert!(view.items.is_empty());

    // Removing again is harmless.
    let view = store.remove_item("eggs");
    assert!(view.items.is_empty());
}

#[tokio::test]
async fn free_shipping_kicks_in_above_fifty_dollars() {
    let catalog = Catalog::demo();
    let store = CartStore::new();

    // 4 jars of honey = $51.96 > $50.00.
    store.add_from_catalog(&catalog, "honey", 4).unwrap();

    let summary = store.summary();
    assert_eq!(summary.subtotal.cents(), 5196);
    assert_eq!(summary.shipping, Money::zero());
}
