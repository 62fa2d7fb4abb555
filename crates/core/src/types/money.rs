//! Monetary amounts for transaction records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in dollars.
///
/// No price data is modeled anywhere in the system, so every amount that
/// appears on a receipt or invoice is zero; the type exists so the records
/// carry properly-typed monetary fields rather than bare numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// A zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
