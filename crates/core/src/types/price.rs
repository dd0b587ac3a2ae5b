//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative product price.
///
/// Prices use decimal arithmetic to avoid floating-point rounding. The
/// currency is implicit (the catalog is single-currency); the newtype exists
/// to enforce the non-negative invariant at every construction site,
/// including deserialization of admin-supplied payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// A zero price.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_non_negative() {
        assert!(Price::new(Decimal::ZERO).is_ok());
        assert!(Price::new(Decimal::new(4500_00, 2)).is_ok());
    }

    #[test]
    fn test_new_rejects_negative() {
        assert!(matches!(
            Price::new(Decimal::new(-1, 0)),
            Err(PriceError::Negative(_))
        ));
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let result: Result<Price, _> = serde_json::from_str("\"-3.50\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_two_decimal_places() {
        let price = Price::new(Decimal::new(2800_00, 2)).unwrap();
        assert_eq!(price.to_string(), "2800.00");
    }
}
