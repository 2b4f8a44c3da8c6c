//! Local persistence port
//!
//! Stores never talk to a storage engine directly. They hold a typed
//! [`Slot`] which reads and writes one named key of a [`KvStore`]:
//!
//! ```text
//! CartStore ──▶ Slot<CartLine> ──┐
//! WishlistStore ──▶ Slot<Product> ├──▶ dyn KvStore ──▶ RedbKvStore   (file)
//! InventoryBook ──▶ Slot<Product> ┘                └──▶ MemoryKvStore (tests)
//! ```

mod memory;
mod redb_store;
mod slot;

pub use memory::MemoryKvStore;
pub use redb_store::RedbKvStore;
pub use slot::{CURRENT_SNAPSHOT_VERSION, Slot, SnapshotEnvelope};

use thiserror::Error;

/// Slot key of the cart snapshot
pub const CART_KEY: &str = "cart";
/// Slot key of the wishlist snapshot
pub const WISHLIST_KEY: &str = "wishlist";
/// Slot key of the admin inventory snapshot
pub const INVENTORY_KEY: &str = "inventory";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupted snapshot in slot '{key}': {reason}")]
    Corrupted { key: String, reason: String },

    #[error("Unsupported snapshot version {version} in slot '{key}'")]
    UnsupportedVersion { key: String, version: u32 },

    #[error("Write rejected: {0}")]
    WriteRejected(String),
}

impl StorageError {
    /// Unreadable data (as opposed to a failing backend)
    pub fn is_unreadable(&self) -> bool {
        matches!(
            self,
            StorageError::Corrupted { .. } | StorageError::UnsupportedVersion { .. }
        )
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Key-value persistence backend
///
/// Values are opaque bytes; the [`Slot`] layer decides what goes in them.
/// All methods take `&self` so backends use interior mutability and can be
/// shared behind an `Arc`.
pub trait KvStore: Send + Sync + std::fmt::Debug {
    /// Read a value; `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Insert or replace a value.
    fn put(&self, key: &str, value: &[u8]) -> StorageResult<()>;

    /// Remove a value. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> StorageResult<()>;
}
