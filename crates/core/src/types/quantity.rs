//! Stock levels and operation quantities.
//!
//! Two related newtypes keep the stock state machine honest at the type
//! level: [`StockLevel`] is the non-negative on-hand count stored on an
//! item, and [`Quantity`] is the strictly positive amount a sell/remove
//! operation asks for. Decrements go through checked arithmetic so a level
//! can never be driven below zero.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Quantity`] from form input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The input is not a whole number.
    #[error("quantity must be a whole number")]
    NotANumber,
    /// The input parsed to zero or a negative value.
    #[error("quantity must be greater than zero")]
    NotPositive,
}

/// A strictly positive operation quantity.
///
/// Form input arrives as text; [`Quantity::parse`] is the single place that
/// turns it into a number, rejecting anything that is not a positive whole
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// One unit, the default for remove-quantity forms.
    pub const ONE: Self = Self(1);

    /// Create a quantity from a known-positive count.
    ///
    /// Returns `None` for zero.
    #[must_use]
    pub const fn new(count: u32) -> Option<Self> {
        if count == 0 { None } else { Some(Self(count)) }
    }

    /// Parse a quantity from text form input.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::NotANumber`] for non-numeric or fractional
    /// input, and [`QuantityError::NotPositive`] for `0` or negative values.
    pub fn parse(s: &str) -> Result<Self, QuantityError> {
        let trimmed = s.trim();
        // Negative integers parse as i64 first so "-3" reports NotPositive,
        // not NotANumber.
        if let Ok(signed) = trimmed.parse::<i64>() {
            if signed <= 0 {
                return Err(QuantityError::NotPositive);
            }
        }
        let value: u32 = trimmed.parse().map_err(|_| QuantityError::NotANumber)?;
        Self::new(value).ok_or(QuantityError::NotPositive)
    }

    /// Get the underlying count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative on-hand stock count.
///
/// The `stock >= 0` invariant is a type invariant: the only way down is
/// [`StockLevel::checked_sub`], which refuses rather than clamps.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StockLevel(u32);

impl StockLevel {
    /// An empty stock level.
    pub const ZERO: Self = Self(0);

    /// Create a stock level from a count.
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    /// Parse a stock level from text form input.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::NotANumber`] for anything that is not a
    /// non-negative whole number.
    pub fn parse(s: &str) -> Result<Self, QuantityError> {
        let value: u32 = s.trim().parse().map_err(|_| QuantityError::NotANumber)?;
        Ok(Self(value))
    }

    /// Get the underlying count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Subtract an operation quantity, refusing to go below zero.
    ///
    /// Returns `None` when `qty` exceeds the current level; the caller
    /// rejects the operation with the available amount in the message.
    #[must_use]
    pub const fn checked_sub(self, qty: Quantity) -> Option<Self> {
        match self.0.checked_sub(qty.get()) {
            Some(rest) => Some(Self(rest)),
            None => None,
        }
    }

    /// Add an operation quantity, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, qty: Quantity) -> Self {
        Self(self.0.saturating_add(qty.get()))
    }

    /// Whether this level can cover the requested quantity.
    #[must_use]
    pub const fn covers(self, qty: Quantity) -> bool {
        self.0 >= qty.get()
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StockLevel {
    fn from(count: u32) -> Self {
        Self(count)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_parse_valid() {
        assert_eq!(Quantity::parse("1").unwrap().get(), 1);
        assert_eq!(Quantity::parse(" 25 ").unwrap().get(), 25);
    }

    #[test]
    fn test_quantity_parse_rejects_non_numeric() {
        assert_eq!(Quantity::parse("abc"), Err(QuantityError::NotANumber));
        assert_eq!(Quantity::parse(""), Err(QuantityError::NotANumber));
        assert_eq!(Quantity::parse("2.5"), Err(QuantityError::NotANumber));
    }

    #[test]
    fn test_quantity_parse_rejects_non_positive() {
        assert_eq!(Quantity::parse("0"), Err(QuantityError::NotPositive));
        assert_eq!(Quantity::parse("-3"), Err(QuantityError::NotPositive));
    }

    #[test]
    fn test_quantity_new_zero_is_none() {
        assert!(Quantity::new(0).is_none());
        assert_eq!(Quantity::new(7).unwrap().get(), 7);
    }

    #[test]
    fn test_stock_checked_sub() {
        let stock = StockLevel::new(45);
        let qty = Quantity::new(5).unwrap();
        assert_eq!(stock.checked_sub(qty), Some(StockLevel::new(40)));
    }

    #[test]
    fn test_stock_checked_sub_refuses_overdraw() {
        let stock = StockLevel::new(3);
        let qty = Quantity::new(4).unwrap();
        assert_eq!(stock.checked_sub(qty), None);
    }

    #[test]
    fn test_stock_sub_to_exactly_zero() {
        let stock = StockLevel::new(4);
        let qty = Quantity::new(4).unwrap();
        assert_eq!(stock.checked_sub(qty), Some(StockLevel::ZERO));
    }

    #[test]
    fn test_stock_covers() {
        let stock = StockLevel::new(10);
        assert!(stock.covers(Quantity::new(10).unwrap()));
        assert!(!stock.covers(Quantity::new(11).unwrap()));
    }

    #[test]
    fn test_stock_parse() {
        assert_eq!(StockLevel::parse("0").unwrap(), StockLevel::ZERO);
        assert_eq!(StockLevel::parse("120").unwrap().get(), 120);
        assert!(StockLevel::parse("-1").is_err());
        assert!(StockLevel::parse("lots").is_err());
    }
}
