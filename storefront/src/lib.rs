//! Storefront engine - cart, wishlist and admin state for a small shop
//!
//! # Overview
//!
//! - **Catalog** (`catalog`): validated, read-only product lookups
//! - **Cart** (`cart`) and **Wishlist** (`wishlist`): write-through stores
//! - **Inventory** (`inventory`): editable admin product list with CSV export
//! - **Newsletter** (`newsletter`): session subscriber list
//! - **Checkout** (`checkout`): order summary for the external checkout form
//! - **Persistence** (`persistence`): slot snapshots over redb or memory
//! - **Notifications** (`message`): broadcast bus for user-facing toasts
//!
//! # Layout
//!
//! ```text
//! storefront/src/
//! ├── core/          # config, state, errors
//! ├── persistence/   # KvStore port, redb + memory backends, slots
//! ├── message/       # Notifier trait, notification bus
//! ├── catalog/       # seed data and lookups
//! ├── cart/          # CartStore
//! ├── wishlist/      # WishlistStore
//! ├── inventory/     # InventoryBook
//! ├── newsletter/    # SubscriberRegistry
//! ├── checkout/      # CheckoutSummary
//! └── utils/         # logging, money, validation, csv
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod inventory;
pub mod message;
pub mod newsletter;
pub mod persistence;
pub mod utils;
pub mod wishlist;

#[cfg(test)]
mod test_support;

// Re-export public types
pub use cart::CartStore;
pub use catalog::Catalog;
pub use checkout::{CheckoutSummary, SummaryLine};
pub use crate::core::{Config, StartupError, StoreError, StoreResult, StorefrontState};
pub use inventory::InventoryBook;
pub use message::{Notification, NotificationBus, NotificationKind, Notifier};
pub use newsletter::{NewsletterError, SubscriberRegistry};
pub use persistence::{KvStore, MemoryKvStore, RedbKvStore, Slot, StorageError};
pub use wishlist::WishlistStore;

// Re-export unified error types from shared
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from the environment
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let log_dir = config.log_to_file.then(|| config.log_dir());
    init_logger_with_file(&config.log_level, config.log_json, log_dir.as_deref())?;
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
     _                    __                 _
 ___| |_ ___  _ __ ___  / _|_ __ ___  _ __ | |_
/ __| __/ _ \| '__/ _ \| |_| '__/ _ \| '_ \| __|
\__ \ || (_) | | |  __/|  _| | | (_) | | | | |_
|___/\__\___/|_|  \___||_| |_|  \___/|_| |_|\__|
    "#
    );
}
