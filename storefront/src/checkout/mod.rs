//! Checkout hand-off summary
//!
//! Payment happens on an external form. This builds the order overview
//! shown next to it from the current cart.

use crate::cart::CartStore;
use crate::utils::money;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryLine {
    pub product_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    /// `unit_price * quantity`, rounded
    pub line_total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSummary {
    pub lines: Vec<SummaryLine>,
    pub subtotal: Decimal,
    /// No tax or shipping: always equal to `subtotal`
    pub total: Decimal,
    pub total_items: u64,
    pub form_url: String,
}

impl CheckoutSummary {
    pub fn from_cart(cart: &CartStore, form_url: impl Into<String>) -> Self {
        let lines: Vec<SummaryLine> = cart
            .items()
            .iter()
            .map(|line| SummaryLine {
                product_id: line.product.id.clone(),
                name: line.product.name.clone(),
                unit_price: line.product.price,
                quantity: line.quantity,
                line_total: money::line_total(line),
            })
            .collect();

        let subtotal = cart.total_price();
        Self {
            lines,
            subtotal,
            total: subtotal,
            total_items: cart.total_items(),
            form_url: form_url.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
