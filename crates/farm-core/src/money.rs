//! # Money Module
//!
//! The `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  The storefront UI happily computes 0.1 + 0.2 = 0.30000000000000004 │
//! │  and then calls toFixed(2) on it. The core must not.                │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    $4.99 is 499. $11.97 is 1197. Rounding happens exactly once,     │
//! │    inside percent_of, and it is half-up by construction.            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use farm_core::money::Money;
//!
//! let price = Money::from_cents(499); // $4.99
//! let line = price * 3;               // $14.97
//! let ten_pct = line.percent_of(1000); // 10% = $1.50 (half-up)
//! # assert_eq!(ten_pct.cents(), 150);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: discounts and savings are differences, which must not
///   underflow an unsigned type mid-expression
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Serde transparent-ish**: serializes as a bare integer for the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use farm_core::money::Money;
    ///
    /// let price = Money::from_cents(1299); // $12.99
    /// assert_eq!(price.cents(), 1299);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is strictly positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies by a quantity (line totals).
    ///
    /// ```rust
    /// use farm_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(349); // $3.49
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 698);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Takes a percentage of this amount, expressed in basis points
    /// (1 bps = 0.01%, so 800 = 8% and 1000 = 10%).
    ///
    /// Rounds half-up using integer math: `(cents * bps + 5000) / 10000`.
    /// i128 intermediates rule out overflow on large amounts.
    ///
    /// ```rust
    /// use farm_core::money::Money;
    ///
    /// // 8% tax on $11.97 = $0.9576 → $0.96
    /// let subtotal = Money::from_cents(1197);
    /// assert_eq!(subtotal.percent_of(800).cents(), 96);
    /// ```
    pub fn percent_of(&self, bps: u32) -> Money {
        let part = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(part as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display (`$11.97`, `-$5.50`). UI formatting and
/// localization stay in the frontend.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1197);
        assert_eq!(money.cents(), 1197);
        assert_eq!(money.dollars(), 11);
        assert_eq!(money.cents_part(), 97);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(5, 99).cents(), 599);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1197)), "$11.97");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(599);

        assert_eq!((a + b).cents(), 1599);
        assert_eq!((a - b).cents(), 401);
        assert_eq!((a * 3).cents(), 3000);
        assert_eq!(a.multiply_quantity(2).cents(), 2000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [499, 698, 0]
            .iter()
            .map(|&c| Money::from_cents(c))
            .sum();
        assert_eq!(total.cents(), 1197);
    }

    #[test]
    fn test_percent_of_exact() {
        // 10% of $100.00 = $10.00, no rounding needed
        assert_eq!(Money::from_cents(10000).percent_of(1000).cents(), 1000);
    }

    #[test]
    fn test_percent_of_rounds_half_up() {
        // 8% of $11.97 = 95.76 cents → 96
        assert_eq!(Money::from_cents(1197).percent_of(800).cents(), 96);
        // 10% of $11.97 = 119.7 cents → 120
        assert_eq!(Money::from_cents(1197).percent_of(1000).cents(), 120);
        // 8% of $0.56 = 4.48 cents → 4 (rounds down below the half)
        assert_eq!(Money::from_cents(56).percent_of(800).cents(), 4);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
    }
}
