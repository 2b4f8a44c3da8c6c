//! redb-backed key-value storage
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `slots` | slot key (`cart`, `wishlist`, `inventory`) | JSON snapshot bytes | One snapshot per store |
//!
//! # Durability
//!
//! Every `put` is its own write transaction committed with redb's default
//! `Durability::Immediate`: when `put` returns the snapshot is on disk,
//! which gives the stores their synchronous write-through behaviour.

use super::{KvStore, StorageResult};
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

/// Table for store snapshots: key = slot key, value = serialized snapshot
const SLOTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("slots");

/// Key-value storage backed by a single redb file
#[derive(Clone)]
pub struct RedbKvStore {
    db: Arc<Database>,
}

impl std::fmt::Debug for RedbKvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbKvStore").finish_non_exhaustive()
    }
}

impl RedbKvStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create the table up front so read transactions never miss it
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SLOTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl KvStore for RedbKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SLOTS_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    fn put(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(SLOTS_TABLE)?;
            table.insert(key, value)?;
        }
        txn.commit()?;
        Ok(())
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(SLOTS_TABLE)?;
            table.remove(key)?;
        }
        txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_delete_in_memory() {
        let kv = RedbKvStore::open_in_memory().unwrap();
        assert!(kv.get("wishlist").unwrap().is_none());

        kv.put("wishlist", b"{\"version\":1}").unwrap();
        assert_eq!(
            kv.get("wishlist").unwrap().as_deref(),
            Some(&b"{\"version\":1}"[..])
        );

        kv.put("wishlist", b"[]").unwrap();
        assert_eq!(kv.get("wishlist").unwrap().as_deref(), Some(&b"[]"[..]));

        kv.delete("wishlist").unwrap();
        assert!(kv.get("wishlist").unwrap().is_none());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.redb");

        {
            let kv = RedbKvStore::open(&path).unwrap();
            kv.put("cart", b"[]").unwrap();
            kv.put("inventory", b"[{}]").unwrap();
        }

        let kv = RedbKvStore::open(&path).unwrap();
        assert_eq!(kv.get("cart").unwrap().as_deref(), Some(&b"[]"[..]));
        assert_eq!(kv.get("inventory").unwrap().as_deref(), Some(&b"[{}]"[..]));
    }
}
