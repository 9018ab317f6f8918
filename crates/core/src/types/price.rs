//! Type-safe price representation using decimal arithmetic.
//!
//! The catalog is single-currency (Indian rupees), so `Price` carries only a
//! decimal amount. Firestore stores the amount as a double; `rust_decimal`
//! keeps cart arithmetic exact.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in Indian rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from whole rupees.
    #[must_use]
    pub fn from_rupees(rupees: i64) -> Self {
        Self(Decimal::from(rupees))
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Multiply by a quantity (for cart line totals).
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Format for display (e.g., `₹45000`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("₹{}", self.0.normalize())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl std::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, p| acc + p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees() {
        let price = Price::from_rupees(45000);
        assert_eq!(price.amount(), Decimal::from(45000));
        assert!(price.is_positive());
    }

    #[test]
    fn test_zero_not_positive() {
        assert!(!Price::default().is_positive());
    }

    #[test]
    fn test_times_quantity() {
        let price = Price::from_rupees(32000);
        assert_eq!(price.times(3).amount(), Decimal::from(96000));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::from_rupees(100), Price::from_rupees(250)]
            .into_iter()
            .sum();
        assert_eq!(total.amount(), Decimal::from(350));
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_rupees(75000).display(), "₹75000");
        // 1999.50 normalizes to 1999.5 for display
        assert_eq!(Price::new(Decimal::new(199_950, 2)).display(), "₹1999.5");
    }
}
