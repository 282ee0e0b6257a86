//! # Error Types
//!
//! Domain-specific error types for farm-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  farm-core errors (this file)                                       │
//! │  └── CartError   - cart operations and coupon application           │
//! │                                                                     │
//! │  farm-store errors (separate crate)                                 │
//! │  └── StoreError  - what presentation surfaces see (serialized)      │
//! │                                                                     │
//! │  Flow: CartError → StoreError → UI toast/inline message             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All variants are local, synchronous and recoverable. The core never logs,
//! retries or falls back; the immediate caller decides how to surface them.

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Errors raised by cart operations.
///
/// Every mutation either fully succeeds or returns one of these with no
/// partial state change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The item descriptor is malformed (empty id, empty name, or a
    /// negative unit price).
    #[error("Invalid item: {reason}")]
    InvalidItem { reason: String },

    /// Quantity on add must be a positive integer.
    #[error("Invalid quantity: {requested}")]
    InvalidQuantity { requested: i64 },

    /// An update targeted an id that is not in the cart.
    #[error("Item not found in cart: {0}")]
    ItemNotFound(String),

    /// The product lists a stock ceiling below 1, so no quantity can be
    /// carried into the cart.
    #[error("Out of stock: {0}")]
    OutOfStock(String),

    /// The coupon code does not match any recognized code.
    #[error("Invalid coupon code: {0}")]
    CouponInvalid(String),

    /// A coupon is already active; it must be reset (or the cart cleared)
    /// before another can be applied.
    #[error("Coupon already applied: {0}")]
    CouponAlreadyApplied(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CartError::InvalidItem {
            reason: "id must not be empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid item: id must not be empty");

        let err = CartError::InvalidQuantity { requested: 0 };
        assert_eq!(err.to_string(), "Invalid quantity: 0");

        let err = CartError::ItemNotFound("p-42".to_string());
        assert_eq!(err.to_string(), "Item not found in cart: p-42");

        let err = CartError::OutOfStock("p-42".to_string());
        assert_eq!(err.to_string(), "Out of stock: p-42");

        let err = CartError::CouponInvalid("SAVEBIG".to_string());
        assert_eq!(err.to_string(), "Invalid coupon code: SAVEBIG");
    }
}
