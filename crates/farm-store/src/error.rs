//! # Store Error Type
//!
//! Unified error type for the session layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in FarmCart                           │
//! │                                                                     │
//! │  UI Surface                  Session Layer                          │
//! │  ──────────                  ─────────────                          │
//! │                                                                     │
//! │  "Add to Cart" click                                                │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │  CartStore / Checkout                                         │  │
//! │  │  Result<T, StoreError>                                        │  │
//! │  │         │                                                     │  │
//! │  │  Cart rule violated? ── CartError ──────────┐                 │  │
//! │  │         │                                   ▼                 │  │
//! │  │  Unknown product? ───── ProductNotFound ── StoreError ──────► │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │                                                                     │
//! │  ErrorResponse { code: "COUPON_INVALID", message: "..." }           │
//! │  → rendered as a toast / inline message by the UI                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use farm_core::CartError;
use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Store Error
// =============================================================================

/// Errors returned by the session layer.
///
/// Wraps the core's [`CartError`] and adds the failures only this layer can
/// detect (unknown catalog ids, checkout pre-flight checks).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A cart rule was violated (invalid item, quantity, coupon, ...).
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The requested id does not exist in the catalog feed.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Checkout was attempted on an empty cart.
    #[error("Cart is empty")]
    CartEmpty,

    /// Checkout requires a signed-in shopper (stub user object).
    #[error("Sign in required to check out")]
    SignInRequired,
}

impl StoreError {
    /// Machine-readable code for programmatic handling in the UI.
    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::Cart(CartError::InvalidItem { .. }) => ErrorCode::InvalidItem,
            StoreError::Cart(CartError::InvalidQuantity { .. }) => ErrorCode::InvalidQuantity,
            StoreError::Cart(CartError::ItemNotFound(_)) => ErrorCode::NotFound,
            StoreError::Cart(CartError::OutOfStock(_)) => ErrorCode::OutOfStock,
            StoreError::Cart(CartError::CouponInvalid(_)) => ErrorCode::CouponInvalid,
            StoreError::Cart(CartError::CouponAlreadyApplied(_)) => {
                ErrorCode::CouponAlreadyApplied
            }
            StoreError::ProductNotFound(_) => ErrorCode::NotFound,
            StoreError::CartEmpty => ErrorCode::CartEmpty,
            StoreError::SignInRequired => ErrorCode::SignInRequired,
        }
    }
}

/// Error codes handed to the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidItem,
    InvalidQuantity,
    NotFound,
    OutOfStock,
    CouponInvalid,
    CouponAlreadyApplied,
    CartEmpty,
    SignInRequired,
}

// =============================================================================
// Error Response DTO
// =============================================================================

/// What the frontend receives when an operation fails:
///
/// ```json
/// { "code": "COUPON_INVALID", "message": "Invalid coupon code: SAVEBIG" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub code: ErrorCode,

    /// Human-readable message for display.
    pub message: String,
}

impl From<&StoreError> for ErrorResponse {
    fn from(err: &StoreError) -> Self {
        ErrorResponse {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_map_to_screaming_snake_case() {
        let err = StoreError::Cart(CartError::CouponInvalid("SAVEBIG".to_string()));
        let response = ErrorResponse::from(&err);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], "COUPON_INVALID");
        assert_eq!(json["message"], "Invalid coupon code: SAVEBIG");
    }

    #[test]
    fn test_checkout_preflight_codes() {
        assert_eq!(StoreError::CartEmpty.code(), ErrorCode::CartEmpty);
        assert_eq!(StoreError::SignInRequired.code(), ErrorCode::SignInRequired);
        assert_eq!(
            StoreError::ProductNotFound("x".to_string()).code(),
            ErrorCode::NotFound
        );
    }
}
