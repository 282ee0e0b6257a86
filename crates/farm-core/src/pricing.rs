//! # Pricing Rules
//!
//! Pure functions for the order-summary math: shipping, tax, coupon
//! discount and grand total.
//!
//! ## Order Summary Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  subtotal (from cart)                                               │
//! │      │                                                              │
//! │      ├──► shipping_cost(subtotal)   FREE above $50.00, else $5.99   │
//! │      │                                                              │
//! │      ├──► sales_tax(subtotal)       flat 8%                         │
//! │      │                                                              │
//! │      └──► coupon discount           10% with code ORGANIC10         │
//! │                                                                     │
//! │  total = subtotal + shipping + tax - discount                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is a function of its arguments only, so the whole
//! summary is testable without constructing a cart.

use crate::money::Money;
use crate::types::TaxRate;

// =============================================================================
// Constants
// =============================================================================

/// Orders strictly above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::from_cents(5000);

/// Flat shipping fee charged below the free-shipping threshold ($5.99).
pub const FLAT_SHIPPING_FEE: Money = Money::from_cents(599);

/// Flat sales tax rate: 8%.
pub const TAX_RATE: TaxRate = TaxRate::from_bps(800);

/// The single recognized coupon code. Matched case-insensitively.
pub const COUPON_CODE: &str = "ORGANIC10";

/// Discount granted by [`COUPON_CODE`]: 10% of the subtotal, in basis points.
pub const COUPON_DISCOUNT_BPS: u32 = 1000;

// =============================================================================
// Pure Pricing Functions
// =============================================================================

/// Shipping cost for a given subtotal.
///
/// The boundary is strict: a subtotal of exactly $50.00 still pays the flat
/// fee; $50.01 ships free.
///
/// ```rust
/// use farm_core::money::Money;
/// use farm_core::pricing::{shipping_cost, FLAT_SHIPPING_FEE};
///
/// assert_eq!(shipping_cost(Money::from_cents(5000)), FLAT_SHIPPING_FEE);
/// assert_eq!(shipping_cost(Money::from_cents(5001)), Money::zero());
/// ```
pub fn shipping_cost(subtotal: Money) -> Money {
    if subtotal > FREE_SHIPPING_THRESHOLD {
        Money::zero()
    } else {
        FLAT_SHIPPING_FEE
    }
}

/// Sales tax on a subtotal at the flat [`TAX_RATE`], half-up rounded.
pub fn sales_tax(subtotal: Money) -> Money {
    subtotal.percent_of(TAX_RATE.bps())
}

/// Coupon discount for a matched code: 10% of the subtotal.
pub fn coupon_discount(subtotal: Money) -> Money {
    subtotal.percent_of(COUPON_DISCOUNT_BPS)
}

/// Checks a coupon code against the recognized value, case-insensitively.
pub fn coupon_matches(code: &str) -> bool {
    code.trim().eq_ignore_ascii_case(COUPON_CODE)
}

/// Grand total: `subtotal + shipping + tax - discount`.
///
/// `discount` defaults to zero when no coupon is applied; the caller passes
/// whatever the cart's coupon slot holds.
pub fn order_total(subtotal: Money, shipping: Money, tax: Money, discount: Money) -> Money {
    subtotal + shipping + tax - discount
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_boundary_is_strict() {
        // Exactly $50.00 still pays shipping; $50.01 is free.
        assert_eq!(shipping_cost(Money::from_cents(5000)), FLAT_SHIPPING_FEE);
        assert_eq!(shipping_cost(Money::from_cents(5001)), Money::zero());
        assert_eq!(shipping_cost(Money::zero()), FLAT_SHIPPING_FEE);
    }

    #[test]
    fn test_sales_tax() {
        // 8% of $11.97 = $0.9576 → 96 cents
        assert_eq!(sales_tax(Money::from_cents(1197)).cents(), 96);
        assert_eq!(sales_tax(Money::zero()).cents(), 0);
    }

    #[test]
    fn test_coupon_matching_is_case_insensitive() {
        assert!(coupon_matches("ORGANIC10"));
        assert!(coupon_matches("organic10"));
        assert!(coupon_matches("Organic10"));
        assert!(coupon_matches("  organic10  "));

        assert!(!coupon_matches("ORGANIC20"));
        assert!(!coupon_matches(""));
    }

    #[test]
    fn test_coupon_discount() {
        // 10% of $11.97 = $1.197 → $1.20
        assert_eq!(coupon_discount(Money::from_cents(1197)).cents(), 120);
    }

    #[test]
    fn test_order_total() {
        // A ($4.99 × 1) + B ($3.49 × 2)
        let subtotal = Money::from_cents(1197);
        let shipping = shipping_cost(subtotal);
        let tax = sales_tax(subtotal);

        assert_eq!(shipping.cents(), 599);
        assert_eq!(tax.cents(), 96);
        assert_eq!(
            order_total(subtotal, shipping, tax, Money::zero()).cents(),
            1892
        );

        // With the coupon: $1.20 off
        let discount = coupon_discount(subtotal);
        assert_eq!(
            order_total(subtotal, shipping, tax, discount).cents(),
            1772
        );
    }
}
