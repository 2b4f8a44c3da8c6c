//! Admin inventory book
//!
//! An editable copy of the product list kept in its own slot. It starts as
//! a copy of the catalog and from then on is its own source of truth; the
//! catalog is never modified.
//!
//! Count edits and removals stay in memory until [`InventoryBook::save`].
//! Adding a product writes through immediately.

use crate::audit_log;
use crate::catalog::{Catalog, normalize_product, validate_product};
use crate::core::StoreResult;
use crate::message::Notifier;
use crate::persistence::Slot;
use crate::utils::csv;
use crate::utils::money::validate_price;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, require_field,
};
use rust_decimal::Decimal;
use shared::models::ProductDraft;
use shared::{AppError, AppResult, ErrorCode, Notification, Product};
use std::collections::HashSet;
use std::sync::Arc;

/// CSV header of [`InventoryBook::export_csv`]
pub const INVENTORY_CSV_HEADER: &str =
    "ID,Name,Description,Price,Category,Inventory Count,Image URL";

pub struct InventoryBook {
    products: Vec<Product>,
    /// Known category keys
    categories: Vec<String>,
    slot: Slot<Product>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for InventoryBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryBook")
            .field("products", &self.products.len())
            .field("slot", &self.slot)
            .finish()
    }
}

impl InventoryBook {
    /// Load the saved inventory, or start from the catalog
    ///
    /// Saved products that fail validation, reference an unknown category
    /// or repeat an earlier id are dropped.
    pub fn open(
        slot: Slot<Product>,
        catalog: &Catalog,
        notifier: Arc<dyn Notifier>,
    ) -> StoreResult<Self> {
        let categories: Vec<String> = catalog.categories().iter().map(|c| c.id.clone()).collect();
        let products = match slot.restore()? {
            Some(saved) => restore_products(saved, &categories),
            None => {
                tracing::info!(slot = %slot.key(), "No saved inventory, seeding from catalog");
                catalog.products().to_vec()
            }
        };
        Ok(Self {
            products,
            categories,
            slot,
            notifier,
        })
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.clone()
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Add a product from the admin form and persist the list
    ///
    /// Name, description, category and image URL are required; a missing
    /// one triggers a `Missing Information` notification. Price and count
    /// default to zero. The new id is one above the highest numeric id.
    pub fn add_product(&mut self, draft: ProductDraft) -> AppResult<Product> {
        let product = match self.build_product(&draft) {
            Ok(product) => product,
            Err(e) => {
                if e.code == ErrorCode::RequiredField {
                    self.notifier.notify(Notification::missing_information());
                }
                return Err(e);
            }
        };

        self.products.push(product.clone());
        self.notifier.notify(Notification::product_added());
        audit_log!(
            "add_product",
            format!("product:{}", product.id).as_str(),
            product.name.as_str()
        );

        self.persist()?;
        Ok(product)
    }

    /// Set a product's stock count; not persisted until [`Self::save`]
    pub fn update_inventory_count(&mut self, id: &str, count: u32) -> bool {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.inventory_count = count;
                true
            }
            None => false,
        }
    }

    /// Remove a product; not persisted until [`Self::save`]
    pub fn remove_product(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return false;
        }
        self.notifier.notify(Notification::product_removed());
        audit_log!("remove_product", format!("product:{id}").as_str());
        true
    }

    /// Persist the whole list
    pub fn save(&mut self) -> StoreResult<()> {
        self.persist()?;
        self.notifier.notify(Notification::inventory_saved());
        audit_log!(
            "save_inventory",
            "inventory",
            format!("{} products", self.products.len()).as_str()
        );
        Ok(())
    }

    pub fn export_csv(&self) -> String {
        csv::document(
            INVENTORY_CSV_HEADER,
            self.products.iter().map(|p| {
                format!(
                    "{},{},{},{},{},{},{}",
                    p.id,
                    csv::quoted(&p.name),
                    csv::quoted(&p.description),
                    p.price,
                    p.category,
                    p.inventory_count,
                    csv::quoted(&p.image_url)
                )
            }),
        )
    }

    fn build_product(&self, draft: &ProductDraft) -> AppResult<Product> {
        let name = require_field(&draft.name, "name", MAX_NAME_LEN)?;
        let description = require_field(&draft.description, "description", MAX_NOTE_LEN)?;
        let category = require_field(&draft.category, "category", MAX_SHORT_TEXT_LEN)?;
        let image_url = require_field(&draft.image_url, "imageUrl", MAX_URL_LEN)?;

        if !self.categories.iter().any(|c| c == category) {
            return Err(
                AppError::new(ErrorCode::CategoryNotFound).with_detail("category", category)
            );
        }
        let price = validate_price(draft.price.unwrap_or(Decimal::ZERO), "price")?;

        let product = Product {
            id: self.next_id().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            category: category.to_string(),
            image_url: image_url.to_string(),
            inventory_count: draft.inventory_count.unwrap_or(0),
            featured: draft.featured.unwrap_or(false),
        };
        validate_product(&product)?;
        Ok(product)
    }

    /// One above the highest numeric id; non-numeric ids are ignored
    fn next_id(&self) -> u64 {
        self.products
            .iter()
            .filter_map(|p| p.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1)
    }

    fn persist(&self) -> StoreResult<()> {
        self.slot.save(&self.products).map_err(|e| {
            tracing::error!(slot = %self.slot.key(), error = %e, "Failed to persist inventory");
            e.into()
        })
    }
}

fn restore_products(saved: Vec<Product>, categories: &[String]) -> Vec<Product> {
    let before = saved.len();
    let mut seen = HashSet::new();
    let products: Vec<Product> = saved
        .into_iter()
        .filter_map(|p| match normalize_product(p) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!(error = %e, "Invalid product in inventory snapshot");
                None
            }
        })
        .filter(|p| categories.contains(&p.category))
        .filter(|p| seen.insert(p.id.clone()))
        .collect();
    if products.len() != before {
        tracing::warn!(
            dropped = before - products.len(),
            "Dropped invalid inventory products on restore"
        );
    }
    products
}
