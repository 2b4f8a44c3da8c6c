//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
///
/// Immutable record owned by the catalog. Stores keep their own copy
/// captured at the time of the operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in the major currency unit, 2 decimal places
    pub price: Decimal,
    /// Category reference (String ID, required)
    pub category: String,
    pub image_url: String,
    /// Stock level at data-load time
    pub inventory_count: u32,
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Whether at least one unit can be sold
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.inventory_count > 0
    }
}

/// Create product payload (admin inventory form)
///
/// Every field is optional so an incomplete form can be reported
/// field by field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub inventory_count: Option<u32>,
    pub featured: Option<bool>,
}
