//! Checkout route.
//!
//! The client sends product ids and quantities; the cart is rebuilt from
//! current catalog prices server-side, so client-supplied prices are
//! never trusted.

use axum::{Json, extract::State};
use meteor_core::ProductId;
use meteor_store::{Cart, OrderConfirmation, ShippingDetails};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// One requested cart line.
#[derive(Debug, Deserialize)]
pub struct LineRequest {
    pub product_id: i64,
    pub quantity: u32,
}

/// Checkout payload.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub lines: Vec<LineRequest>,
    pub details: ShippingDetails,
}

/// Place a simulated order.
pub async fn place_order(
    State(state): State<AppState>,
    Json(body): Json<CheckoutRequest>,
) -> Result<Json<OrderConfirmation>> {
    let mut cart = Cart::new();
    for line in &body.lines {
        if line.quantity == 0 {
            return Err(AppError::BadRequest(format!(
                "quantity for product {} must be at least 1",
                line.product_id
            )));
        }
        let product = state
            .store()
            .products()
            .get_by_id(ProductId::new(line.product_id))
            .await?;
        cart.add(product);
        cart.set_quantity(ProductId::new(line.product_id), line.quantity);
    }

    let confirmation = state.checkout().place_order(&cart, &body.details).await?;
    Ok(Json(confirmation))
}
