//! Simulated checkout.
//!
//! There is no payment processing anywhere in this system: placing an
//! order validates the shipping details, waits a configurable processing
//! delay in place of a payment round trip, and returns a confirmation.
//! The caller clears its cart afterwards.

use std::time::Duration;

use chrono::{DateTime, Utc};
use meteor_core::{EmailError, OrderId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};

use crate::cart::Cart;
use crate::ids;

/// Errors produced when placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart has no lines.
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// A required shipping field is blank.
    #[error("missing {0}")]
    MissingField(&'static str),

    /// The contact email is structurally invalid.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Shipping details collected by the checkout form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub zip: String,
}

impl ShippingDetails {
    fn validate(&self) -> Result<(), CheckoutError> {
        meteor_core::Email::parse(&self.email)?;

        let required: [(&'static str, &str); 5] = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("address", &self.address),
            ("city", &self.city),
            ("zip", &self.zip),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(CheckoutError::MissingField(label));
            }
        }
        Ok(())
    }
}

/// What the shopper gets back after the simulated processing completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub total: Decimal,
    pub units: u32,
    pub placed_at: DateTime<Utc>,
}

/// Order placement with a simulated processing delay.
#[derive(Debug, Clone)]
pub struct Checkout {
    delay: Duration,
}

impl Checkout {
    /// Create a checkout with the given simulated processing delay
    /// (zero in tests).
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Validate, wait out the simulated processing time, and confirm.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] for an empty cart and a
    /// validation error for unusable shipping details.
    #[instrument(skip(self, cart, details), fields(lines = cart.line_count()))]
    pub async fn place_order(
        &self,
        cart: &Cart,
        details: &ShippingDetails,
    ) -> Result<OrderConfirmation, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        details.validate()?;

        tokio::time::sleep(self.delay).await;

        let confirmation = OrderConfirmation {
            order_id: OrderId::new(ids::now_millis()),
            total: cart.total(),
            units: cart.unit_count(),
            placed_at: Utc::now(),
        };
        info!(order_id = %confirmation.order_id, total = %confirmation.total, "order placed");
        Ok(confirmation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use meteor_core::{Price, ProductId};

    use super::*;
    use crate::models::Product;

    fn details() -> ShippingDetails {
        ShippingDetails {
            email: "asha@example.com".to_owned(),
            first_name: "Asha".to_owned(),
            last_name: "Verma".to_owned(),
            address: "12 MG Road".to_owned(),
            city: "Pune".to_owned(),
            zip: "411001".to_owned(),
        }
    }

    fn cart_with_one_item() -> Cart {
        let mut cart = Cart::new();
        cart.add(Product {
            id: ProductId::new(1),
            name: "Boots".to_owned(),
            price: Price::new(Decimal::new(4500_00, 2)).unwrap(),
            category: "Boots".to_owned(),
            image: String::new(),
            description: String::new(),
        });
        cart
    }

    #[tokio::test]
    async fn test_empty_cart_rejected() {
        let checkout = Checkout::new(Duration::ZERO);
        let err = checkout
            .place_order(&Cart::new(), &details())
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyCart));
    }

    #[tokio::test]
    async fn test_blank_field_rejected() {
        let checkout = Checkout::new(Duration::ZERO);
        let mut bad = details();
        bad.city = "  ".to_owned();
        let err = checkout
            .place_order(&cart_with_one_item(), &bad)
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::MissingField("city")));
    }

    #[tokio::test]
    async fn test_confirmation_carries_cart_total() {
        let checkout = Checkout::new(Duration::ZERO);
        let confirmation = checkout
            .place_order(&cart_with_one_item(), &details())
            .await
            .unwrap();
        assert_eq!(confirmation.total, Decimal::new(4500_00, 2));
        assert_eq!(confirmation.units, 1);
    }
}
