//! Type-safe price representation using decimal arithmetic.
//!
//! The storefront operates in a single display locale and currency (rubles),
//! so `Price` wraps a bare [`Decimal`] amount rather than carrying a currency
//! code on every value. Display formatting lives in the storefront's template
//! filters; this type only produces raw numeric amounts.

use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative amount of money in rubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero rubles.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a whole number of rubles.
    #[must_use]
    pub fn from_rubles(rubles: i64) -> Self {
        Self(Decimal::from(rubles))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Multiply a unit price by a quantity, giving a line total.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Whether this price is exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
