//! Money type for representing prices.
//!
//! Prices are whole rupees held in an `i64`. They serialize as a bare
//! integer so the persisted cart stays `{"price": 120}`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Currency symbol used for every displayed amount.
pub const CURRENCY_SYMBOL: &str = "\u{20b9}";

/// A monetary amount in whole currency units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create an amount.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw amount.
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn try_multiply(&self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(i64::from(quantity)).map(Money)
    }

    /// Add another amount, returning `None` on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Sum an iterator of amounts, returning `None` on overflow.
    pub fn try_sum<'a>(iter: impl IntoIterator<Item = &'a Money>) -> Option<Money> {
        iter.into_iter()
            .try_fold(Money::zero(), |acc, m| acc.try_add(m))
    }

    /// Format with the currency symbol (e.g. "₹120").
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.0)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
