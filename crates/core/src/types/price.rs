//! Type-safe price representation using decimal arithmetic.
//!
//! The catalog prices everything in a single currency ("synapses"), so
//! unlike a multi-currency store there is no currency code to carry around.
//! Prices stay `Decimal` internally to keep basket totals exact.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in synapses.
///
/// Products with no price at all are represented as `Option<Price>` on
/// [`Product`](crate::Product) - they exist in the catalog but cannot be
/// purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero price, the identity for summation.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of synapses.
    #[must_use]
    pub fn from_synapses(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl std::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, p| acc + p)
    }
}

impl std::fmt::Display for Price {
    /// Format for display (e.g., "750 synapses").
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} synapses", self.0)
    }
}
