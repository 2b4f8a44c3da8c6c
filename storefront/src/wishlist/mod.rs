//! Wishlist
//!
//! Ordered set of saved products, unique by id, written through to its slot.

use crate::catalog::normalize_product;
use crate::core::StoreResult;
use crate::message::Notifier;
use crate::persistence::Slot;
use shared::{Notification, Product};
use std::collections::HashSet;
use std::sync::Arc;

pub struct WishlistStore {
    items: Vec<Product>,
    slot: Slot<Product>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for WishlistStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistStore")
            .field("items", &self.items.len())
            .field("slot", &self.slot)
            .finish()
    }
}

impl WishlistStore {
    /// Restore the wishlist from its slot
    ///
    /// Duplicate ids keep their first entry; invalid products are dropped.
    pub fn open(slot: Slot<Product>, notifier: Arc<dyn Notifier>) -> StoreResult<Self> {
        let mut seen = HashSet::new();
        let items: Vec<Product> = slot
            .restore()?
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| match normalize_product(p) {
                Ok(p) => Some(p),
                Err(e) => {
                    tracing::warn!(error = %e, "Invalid product in wishlist snapshot");
                    None
                }
            })
            .filter(|p| seen.insert(p.id.clone()))
            .collect();
        tracing::debug!(slot = %slot.key(), items = items.len(), "Wishlist restored");
        Ok(Self {
            items,
            slot,
            notifier,
        })
    }

    /// Save a product; already saved is a silent no-op
    ///
    /// A malformed product is rejected and the list left untouched.
    pub fn add_item(&mut self, product: &Product) -> StoreResult<()> {
        if self.is_in_wishlist(&product.id) {
            return Ok(());
        }
        let product = normalize_product(product.clone())?;
        self.items.push(product.clone());
        self.notifier
            .notify(Notification::wishlist_added(&product.name));
        self.persist()
    }

    pub fn remove_item(&mut self, product_id: &str) -> StoreResult<()> {
        let Some(i) = self.items.iter().position(|p| p.id == product_id) else {
            return Ok(());
        };
        let removed = self.items.remove(i);
        self.notifier
            .notify(Notification::wishlist_removed(&removed.name));
        self.persist()
    }

    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    /// Remove if saved, save otherwise
    pub fn toggle_item(&mut self, product: &Product) -> StoreResult<()> {
        if self.is_in_wishlist(&product.id) {
            self.remove_item(&product.id)
        } else {
            self.add_item(product)
        }
    }

    pub fn clear_wishlist(&mut self) -> StoreResult<()> {
        self.items.clear();
        self.notifier.notify(Notification::wishlist_cleared());
        self.persist()
    }

    pub fn items(&self) -> Vec<Product> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) -> StoreResult<()> {
        self.slot.save(&self.items).map_err(|e| {
            tracing::error!(slot = %self.slot.key(), error = %e, "Failed to persist wishlist");
            e.into()
        })
    }
}
