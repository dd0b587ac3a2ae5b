//! The shopping cart.
//!
//! Client-only state: a cart is a plain value held by the caller for the
//! session and passed explicitly wherever it is needed. Lines carry a
//! product snapshot plus a quantity of at least one; line identity is the
//! product id. The total is derived, never stored.

use meteor_core::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Product;

/// One cart line: a product snapshot and how many of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    /// Always >= 1; a line that would drop to zero is removed instead.
    pub quantity: u32,
}

impl CartLine {
    /// Price x quantity for this line.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.product.price.amount() * Decimal::from(self.quantity)
    }
}

/// An in-memory shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one of `product`. Adding a product already in the cart bumps
    /// its quantity instead of creating a second line.
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
    }

    /// Set the quantity for a product's line. Quantities clamp to at
    /// least 1; absent products are ignored (use [`Cart::add`]).
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        if let Some(line) = self.line_mut(id) {
            line.quantity = quantity.max(1);
        }
    }

    /// Remove a product's line entirely. Absent ids are a no-op.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product.id != id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of price x quantity across all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product.id == id)
    }
}
