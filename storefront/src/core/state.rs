use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::checkout::CheckoutSummary;
use crate::core::{Config, StartupError};
use crate::inventory::InventoryBook;
use crate::message::{Notification, NotificationBus, Notifier};
use crate::newsletter::SubscriberRegistry;
use crate::persistence::{CART_KEY, INVENTORY_KEY, KvStore, RedbKvStore, Slot, WISHLIST_KEY};
use crate::wishlist::WishlistStore;

/// Storefront state - holds every store for the lifetime of the process
///
/// Cloning is cheap: stores are shared behind `Arc<Mutex<_>>`, so each
/// consumer gets a handle to the same instances.
///
/// | Field | Persisted in slot |
/// |-------|-------------------|
/// | cart | `cart` |
/// | wishlist | `wishlist` |
/// | inventory | `inventory` (on add/save) |
/// | newsletter | - |
#[derive(Clone, Debug)]
pub struct StorefrontState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub cart: Arc<Mutex<CartStore>>,
    pub wishlist: Arc<Mutex<WishlistStore>>,
    pub inventory: Arc<Mutex<InventoryBook>>,
    pub newsletter: Arc<Mutex<SubscriberRegistry>>,
    pub notifications: NotificationBus,
}

impl StorefrontState {
    /// Open the database under the work dir and restore every store
    ///
    /// 1. Work dir (created if missing)
    /// 2. Database (work_dir/storefront.redb)
    /// 3. Catalog, stores, newsletter samples in development
    pub fn initialize(config: &Config) -> Result<Self, StartupError> {
        let work_dir = PathBuf::from(&config.work_dir);
        std::fs::create_dir_all(&work_dir).map_err(|source| StartupError::WorkDir {
            path: work_dir.clone(),
            source,
        })?;

        let db_path = config.database_path();
        tracing::info!(path = %db_path.display(), "Opening storefront database");
        let kv = RedbKvStore::open(&db_path)?;

        Self::with_kv(config, Arc::new(kv))
    }

    /// Restore every store from an already opened backend
    pub fn with_kv(config: &Config, kv: Arc<dyn KvStore>) -> Result<Self, StartupError> {
        let notifications = NotificationBus::with_capacity(config.notification_capacity);
        let notifier: Arc<dyn Notifier> = Arc::new(notifications.clone());

        let catalog = Catalog::seeded()?;
        let cart = CartStore::open(Slot::new(kv.clone(), CART_KEY), notifier.clone())?;
        let wishlist =
            WishlistStore::open(Slot::new(kv.clone(), WISHLIST_KEY), notifier.clone())?;
        let inventory = InventoryBook::open(Slot::new(kv, INVENTORY_KEY), &catalog, notifier)?;

        let mut newsletter = SubscriberRegistry::new();
        if config.is_development() {
            newsletter.seed_samples();
        }

        tracing::info!(
            products = catalog.products().len(),
            cart_lines = cart.len(),
            wishlist_items = wishlist.len(),
            inventory_products = inventory.len(),
            "Storefront state initialized"
        );

        Ok(Self {
            config: config.clone(),
            catalog: Arc::new(catalog),
            cart: Arc::new(Mutex::new(cart)),
            wishlist: Arc::new(Mutex::new(wishlist)),
            inventory: Arc::new(Mutex::new(inventory)),
            newsletter: Arc::new(Mutex::new(newsletter)),
            notifications,
        })
    }

    /// Receive notifications sent from now on
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notifications.subscribe()
    }

    /// Summary of the current cart for the checkout form
    pub fn checkout_summary(&self) -> CheckoutSummary {
        CheckoutSummary::from_cart(&self.cart.lock(), self.config.checkout_form_url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryKvStore;

    #[test]
    fn test_development_seeds_newsletter() {
        let dir = tempfile::tempdir().unwrap();
        let work_dir = dir.path().to_string_lossy().to_string();

        let dev = StorefrontState::with_kv(
            &Config::with_overrides(work_dir.as_str(), "development"),
            Arc::new(MemoryKvStore::new()),
        )
        .unwrap();
        assert_eq!(dev.newsletter.lock().len(), 2);

        let prod = StorefrontState::with_kv(
            &Config::with_overrides(work_dir.as_str(), "production"),
            Arc::new(MemoryKvStore::new()),
        )
        .unwrap();
        assert!(prod.newsletter.lock().is_empty());
    }

    #[test]
    fn test_initialize_creates_database() {
        let dir = tempfile::tempdir().unwrap();
        let work_dir = dir.path().join("nested");
        let config = Config::with_overrides(work_dir.to_string_lossy(), "production");

        let state = StorefrontState::initialize(&config).unwrap();
        assert!(config.database_path().exists());
        assert_eq!(state.catalog.products().len(), 12);
        assert!(state.cart.lock().is_empty());
        assert!(state.checkout_summary().is_empty());
    }
}
