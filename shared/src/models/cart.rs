//! Cart line model

use super::product::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of the cart: a product snapshot and how many units of it
///
/// The cart holds at most one line per product id; `quantity` is always
/// at least 1 and never above `product.inventory_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Unrounded `price * quantity`, saturating at `Decimal::MAX`
    pub fn line_total(&self) -> Decimal {
        self.product
            .price
            .checked_mul(Decimal::from(self.quantity))
            .unwrap_or(Decimal::MAX)
    }
}
