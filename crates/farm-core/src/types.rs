//! # Domain Types
//!
//! Core domain types for the FarmCart storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐    │
//! │  │    Product      │   │    Category     │   │    TaxRate      │    │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │    │
//! │  │  id             │   │  Vegetables     │   │  bps (u32)      │    │
//! │  │  name           │   │  Fruits         │   │  800 = 8%       │    │
//! │  │  price_cents    │   │  Dairy          │   └─────────────────┘    │
//! │  │  original_price │   │  Herbs          │                          │
//! │  │  organic, unit  │   │  Other          │                          │
//! │  └─────────────────┘   └─────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Product` is a read-only catalog entry. The cart never mutates it; the
//! relevant fields (name, price) are frozen into a `LineItem` at add time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01% = 1/10000. The storefront charges a flat 8%
/// sales tax, i.e. 800 bps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Category & Season
// =============================================================================

/// Product category used by catalog filters and display badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vegetables,
    Fruits,
    Dairy,
    Herbs,
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Vegetables => "vegetables",
            Category::Fruits => "fruits",
            Category::Dairy => "dairy",
            Category::Herbs => "herbs",
            Category::Other => "other",
        };
        f.write_str(s)
    }
}

/// Growing season a product is associated with. `All` means year-round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    All,
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog feed.
///
/// ## Identity
/// `id` is the stable product identifier; it is also the merge key inside
/// the cart (one line item per distinct id).
///
/// ## Price Fields
/// - `price_cents`: what the customer pays per unit
/// - `original_price_cents`: pre-discount price; when present and greater
///   than `price_cents`, the difference counts as a "saving" in the cart
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable product identifier, unique within the catalog.
    pub id: String,

    /// Display name shown on cards, cart rows and receipts.
    pub name: String,

    /// Optional longer description for the detail page.
    pub description: Option<String>,

    /// Category for filters and badges.
    pub category: Category,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Pre-discount price in cents, if the product is on sale.
    pub original_price_cents: Option<i64>,

    /// Display-only unit label ("lb", "dozen", "jar"). Not used in math.
    pub unit: Option<String>,

    /// Primary image URL. Display-only.
    pub image: Option<String>,

    /// Whether the product is certified organic.
    pub organic: bool,

    /// Season the product is harvested in.
    pub seasonal: Season,

    /// Average review rating, 0.0-5.0. Display and filtering only.
    pub rating: f64,

    /// Number of reviews behind `rating`.
    pub review_count: i64,

    /// Units currently in stock. `None` means not tracked (always sellable);
    /// `Some(n)` acts as a ceiling when adding to the cart.
    pub stock: Option<i64>,

    /// Free-form tags ("organic", "heirloom", ...). Used by tag filters.
    pub tags: Vec<String>,

    /// Popularity score (0-100) driving the suggestion ranking.
    pub popularity: i64,
}

impl Product {
    /// Returns the price as Money.
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the pre-discount price as Money, if any.
    pub fn original_price(&self) -> Option<Money> {
        self.original_price_cents.map(Money::from_cents)
    }

    /// True when the product carries a listed original price above the
    /// current price.
    pub fn is_on_sale(&self) -> bool {
        match self.original_price_cents {
            Some(original) => original > self.price_cents,
            None => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: i64, original: Option<i64>) -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Organic Heirloom Tomatoes".to_string(),
            description: None,
            category: Category::Vegetables,
            price_cents: price,
            original_price_cents: original,
            unit: Some("lb".to_string()),
            image: None,
            organic: true,
            seasonal: Season::Summer,
            rating: 4.7,
            review_count: 128,
            stock: Some(25),
            tags: vec!["organic".to_string()],
            popularity: 95,
        }
    }

    #[test]
    fn test_tax_rate() {
        let rate = TaxRate::from_bps(800);
        assert_eq!(rate.bps(), 800);
        assert_eq!(rate.percentage(), 8.0);
    }

    #[test]
    fn test_on_sale_requires_higher_original_price() {
        assert!(product(499, Some(699)).is_on_sale());
        assert!(!product(499, Some(499)).is_on_sale());
        assert!(!product(499, Some(399)).is_on_sale());
        assert!(!product(499, None).is_on_sale());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Vegetables).unwrap();
        assert_eq!(json, "\"vegetables\"");
    }
}
