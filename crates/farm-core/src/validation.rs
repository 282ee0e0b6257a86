//! # Validation Module
//!
//! Input validation for cart operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: UI surface (out of scope)                                 │
//! │  ├── Disables the minus button at quantity 1                        │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  ├── Item descriptor checks (id, name, price)                       │
//! │  └── Quantity checks                                                │
//! │                                                                     │
//! │  The cart trusts nothing the UI sends; every add re-validates.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CartError, CartResult};
use crate::types::Product;

// =============================================================================
// Item Descriptor Validators
// =============================================================================

/// Validates a product descriptor before it is frozen into a line item.
///
/// ## Rules
/// - `id` must not be empty or whitespace
/// - `name` must not be empty or whitespace
/// - `price_cents` must be non-negative (zero is allowed: free items)
///
/// ## Example
/// ```rust,ignore
/// validate_item(&product)?;
/// ```
pub fn validate_item(product: &Product) -> CartResult<()> {
    if product.id.trim().is_empty() {
        return Err(CartError::InvalidItem {
            reason: "id must not be empty".to_string(),
        });
    }

    if product.name.trim().is_empty() {
        return Err(CartError::InvalidItem {
            reason: "name must not be empty".to_string(),
        });
    }

    if product.price_cents < 0 {
        return Err(CartError::InvalidItem {
            reason: format!("unit price must not be negative: {}", product.price_cents),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity for an add operation.
///
/// Must be a positive integer (>= 1). Quantity updates below 1 are handled
/// separately by [`crate::cart::Cart::update_quantity`], which treats them
/// as a no-op rather than an error.
pub fn validate_quantity(qty: i64) -> CartResult<()> {
    if qty < 1 {
        return Err(CartError::InvalidQuantity { requested: qty });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Season};

    fn product(id: &str, name: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            category: Category::Other,
            price_cents,
            original_price_cents: None,
            unit: None,
            image: None,
            organic: false,
            seasonal: Season::All,
            rating: 0.0,
            review_count: 0,
            stock: None,
            tags: Vec::new(),
            popularity: 0,
        }
    }

    #[test]
    fn test_validate_item() {
        assert!(validate_item(&product("p-1", "Organic Honey", 1299)).is_ok());
        assert!(validate_item(&product("p-1", "Free Sample", 0)).is_ok());

        assert!(validate_item(&product("", "Organic Honey", 1299)).is_err());
        assert!(validate_item(&product("   ", "Organic Honey", 1299)).is_err());
        assert!(validate_item(&product("p-1", "", 1299)).is_err());
        assert!(validate_item(&product("p-1", "Organic Honey", -1)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(99).is_ok());

        assert_eq!(
            validate_quantity(0),
            Err(CartError::InvalidQuantity { requested: 0 })
        );
        assert!(validate_quantity(-3).is_err());
    }
}
