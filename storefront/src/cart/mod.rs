//! Shopping cart
//!
//! An ordered list of [`CartLine`]s, at most one per product id, written
//! through to its slot after every change.
//!
//! Stock limits are enforced against the product snapshot of each line: a
//! line never holds more units than its product's `inventory_count`.
//! Running into the limit is reported as a notification, never as an error.

use crate::catalog::normalize_product;
use crate::core::StoreResult;
use crate::message::Notifier;
use crate::persistence::Slot;
use crate::utils::money;
use rust_decimal::Decimal;
use shared::{CartLine, Notification, Product};
use std::collections::HashSet;
use std::sync::Arc;

pub struct CartStore {
    lines: Vec<CartLine>,
    slot: Slot<CartLine>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("lines", &self.lines.len())
            .field("slot", &self.slot)
            .finish()
    }
}

impl CartStore {
    /// Restore the cart from its slot
    ///
    /// Missing or unreadable snapshots start an empty cart. Restored lines
    /// are normalized: duplicates and invalid products are dropped, prices
    /// rounded to cents and quantities clamped to the line's stock.
    pub fn open(slot: Slot<CartLine>, notifier: Arc<dyn Notifier>) -> StoreResult<Self> {
        let lines = slot.restore()?.map(normalize).unwrap_or_default();
        tracing::debug!(slot = %slot.key(), lines = lines.len(), "Cart restored");
        Ok(Self {
            lines,
            slot,
            notifier,
        })
    }

    /// Add `quantity` units of a product
    ///
    /// An out-of-stock product is rejected. A quantity that would exceed the
    /// product's stock is clamped to it. The existing line's product
    /// snapshot is replaced by `product`.
    ///
    /// A malformed product (empty id or name, negative or oversized price)
    /// is rejected with [`StoreError::InvalidProduct`] and the cart is left
    /// untouched.
    ///
    /// [`StoreError::InvalidProduct`]: crate::core::StoreError::InvalidProduct
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> StoreResult<()> {
        let product = &normalize_product(product.clone())?;
        if !product.in_stock() {
            self.notifier.notify(Notification::out_of_stock());
            return Ok(());
        }
        if quantity == 0 {
            return Ok(());
        }

        let available = product.inventory_count;
        let notification = match self.position(&product.id) {
            Some(i) => {
                let line = &mut self.lines[i];
                let wanted = line.quantity.saturating_add(quantity);
                line.product = product.clone();
                if wanted > available {
                    line.quantity = available;
                    Notification::limited_stock(available)
                } else {
                    line.quantity = wanted;
                    Notification::quantity_updated(&product.name)
                }
            }
            None => {
                self.lines
                    .push(CartLine::new(product.clone(), quantity.min(available)));
                if quantity > available {
                    Notification::limited_stock(available)
                } else {
                    Notification::item_added(&product.name)
                }
            }
        };

        self.notifier.notify(notification);
        self.persist()
    }

    /// Add a single unit
    pub fn add_one(&mut self, product: &Product) -> StoreResult<()> {
        self.add_item(product, 1)
    }

    pub fn remove_item(&mut self, product_id: &str) -> StoreResult<()> {
        let Some(i) = self.position(product_id) else {
            return Ok(());
        };
        let line = self.lines.remove(i);
        self.notifier
            .notify(Notification::item_removed(&line.product.name));
        self.persist()
    }

    /// Set a line's quantity
    ///
    /// Zero or less removes the line; above the line's stock clamps to it.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> StoreResult<()> {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }
        let Some(i) = self.position(product_id) else {
            return Ok(());
        };

        let line = &mut self.lines[i];
        let available = line.product.inventory_count;
        let requested = u32::try_from(quantity).unwrap_or(u32::MAX);

        let notification = if requested > available {
            line.quantity = available;
            Notification::limited_stock(available)
        } else if requested == line.quantity {
            return Ok(());
        } else {
            line.quantity = requested;
            Notification::quantity_updated(&line.product.name)
        };

        self.notifier.notify(notification);
        self.persist()
    }

    pub fn clear_cart(&mut self) -> StoreResult<()> {
        self.lines.clear();
        self.notifier.notify(Notification::cart_cleared());
        self.persist()
    }

    /// Sum of `price * quantity`, rounded to cents
    pub fn total_price(&self) -> Decimal {
        money::lines_total(&self.lines)
    }

    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn items(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    pub fn line(&self, product_id: &str) -> Option<CartLine> {
        self.lines
            .iter()
            .find(|l| l.product.id == product_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.product.id == product_id)
    }

    fn persist(&self) -> StoreResult<()> {
        self.slot.save(&self.lines).map_err(|e| {
            tracing::error!(slot = %self.slot.key(), error = %e, "Failed to persist cart");
            e.into()
        })
    }
}

fn normalize(lines: Vec<CartLine>) -> Vec<CartLine> {
    let mut seen = HashSet::new();
    let before = lines.len();
    let lines: Vec<CartLine> = lines
        .into_iter()
        .filter_map(|l| match normalize_product(l.product) {
            Ok(product) => Some(CartLine::new(product, l.quantity)),
            Err(e) => {
                tracing::warn!(error = %e, "Invalid product in cart snapshot");
                None
            }
        })
        .filter(|l| seen.insert(l.product.id.clone()))
        .filter_map(|mut l| {
            l.quantity = l.quantity.min(l.product.inventory_count);
            (l.quantity > 0).then_some(l)
        })
        .collect();
    if lines.len() != before {
        tracing::warn!(dropped = before - lines.len(), "Dropped invalid cart lines on restore");
    }
    lines
}
