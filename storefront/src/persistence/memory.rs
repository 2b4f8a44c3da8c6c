use super::{KvStore, StorageError, StorageResult};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// In-memory [`KvStore`]
///
/// Used by tests and as a throwaway backend. Writes can be made to fail on
/// demand to exercise persistence-failure paths.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `put`/`delete` fail (quota exceeded)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Raw value of a key, for inspecting snapshots
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().get(key).cloned()
    }

    fn check_writable(&self) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteRejected("quota exceeded".into()));
        }
        Ok(())
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        self.check_writable()?;
        self.entries.lock().insert(key.to_string(), value.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.entries.lock().remove(key);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_delete() {
        let kv = MemoryKvStore::new();
        assert!(kv.get("cart").unwrap().is_none());

        kv.put("cart", b"[]").unwrap();
        assert_eq!(kv.get("cart").unwrap().as_deref(), Some(&b"[]"[..]));

        kv.delete("cart").unwrap();
        kv.delete("cart").unwrap();
        assert!(kv.get("cart").unwrap().is_none());
        assert_eq!(kv.write_count(), 3);
    }

    #[test]
    fn test_fail_writes() {
        let kv = MemoryKvStore::new();
        kv.put("cart", b"[1]").unwrap();
        kv.set_fail_writes(true);

        assert!(matches!(
            kv.put("cart", b"[2]"),
            Err(StorageError::WriteRejected(_))
        ));
        assert_eq!(kv.raw("cart").as_deref(), Some(&b"[1]"[..]));

        kv.set_fail_writes(false);
        kv.put("cart", b"[2]").unwrap();
        assert_eq!(kv.raw("cart").as_deref(), Some(&b"[2]"[..]));
    }
}
