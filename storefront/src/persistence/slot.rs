use super::{KvStore, StorageError, StorageResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared::util::{Timestamp, now_millis};
use std::marker::PhantomData;
use std::sync::Arc;

/// Version written by this build
pub const CURRENT_SNAPSHOT_VERSION: u32 = 1;

/// Versioned snapshot stored in a slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEnvelope<T> {
    pub version: u32,
    /// When the snapshot was written (Unix ms)
    pub saved_at: Timestamp,
    pub items: Vec<T>,
}

/// What may be found in a slot
///
/// Snapshots written before versioning are a bare JSON array.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredSnapshot<T> {
    Versioned(SnapshotEnvelope<T>),
    Legacy(Vec<T>),
}

/// One named key of a [`KvStore`] holding a whole collection
///
/// `load` and `save` always move the entire collection; there is no
/// partial update.
pub struct Slot<T> {
    key: String,
    kv: Arc<dyn KvStore>,
    _items: PhantomData<fn() -> T>,
}

impl<T> std::fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot").field("key", &self.key).finish()
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            kv: Arc::clone(&self.kv),
            _items: PhantomData,
        }
    }
}

impl<T> Slot<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(kv: Arc<dyn KvStore>, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kv,
            _items: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the collection
    ///
    /// Returns `Ok(None)` when the slot was never written. Undecodable
    /// content is reported as [`StorageError::Corrupted`], a snapshot from a
    /// newer build as [`StorageError::UnsupportedVersion`].
    pub fn load(&self) -> StorageResult<Option<Vec<T>>> {
        let Some(bytes) = self.kv.get(&self.key)? else {
            return Ok(None);
        };

        let stored: StoredSnapshot<T> =
            serde_json::from_slice(&bytes).map_err(|e| StorageError::Corrupted {
                key: self.key.clone(),
                reason: e.to_string(),
            })?;

        match stored {
            StoredSnapshot::Versioned(envelope) => {
                if envelope.version > CURRENT_SNAPSHOT_VERSION {
                    return Err(StorageError::UnsupportedVersion {
                        key: self.key.clone(),
                        version: envelope.version,
                    });
                }
                Ok(Some(envelope.items))
            }
            StoredSnapshot::Legacy(items) => {
                tracing::debug!(slot = %self.key, "Loaded unversioned snapshot");
                Ok(Some(items))
            }
        }
    }

    /// Like [`Slot::load`], but an unreadable snapshot is logged and treated
    /// as absent. Backend failures are still returned.
    pub fn restore(&self) -> StorageResult<Option<Vec<T>>> {
        match self.load() {
            Err(e) if e.is_unreadable() => {
                tracing::warn!(slot = %self.key, error = %e, "Discarding unreadable snapshot");
                Ok(None)
            }
            other => other,
        }
    }

    /// Replace the stored collection
    pub fn save(&self, items: &[T]) -> StorageResult<()> {
        let envelope = SnapshotEnvelope {
            version: CURRENT_SNAPSHOT_VERSION,
            saved_at: now_millis(),
            items: items.iter().collect::<Vec<_>>(),
        };
        let bytes = serde_json::to_vec(&envelope)?;
        self.kv.put(&self.key, &bytes)?;
        tracing::trace!(slot = %self.key, items = items.len(), bytes = bytes.len(), "Snapshot saved");
        Ok(())
    }

    /// Drop the stored collection
    pub fn remove(&self) -> StorageResult<()> {
        self.kv.delete(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryKvStore;
    use serde_json::json;

    fn slot(kv: &Arc<MemoryKvStore>) -> Slot<String> {
        Slot::new(kv.clone() as Arc<dyn KvStore>, "wishlist")
    }

    #[test]
    fn test_absent_slot_loads_none() {
        let kv = Arc::new(MemoryKvStore::new());
        assert!(slot(&kv).load().unwrap().is_none());
    }

    #[test]
    fn test_save_writes_versioned_envelope() {
        let kv = Arc::new(MemoryKvStore::new());
        let slot = slot(&kv);
        slot.save(&["a".to_string(), "b".to_string()]).unwrap();

        let raw: serde_json::Value = serde_json::from_slice(&kv.raw("wishlist").unwrap()).unwrap();
        assert_eq!(raw["version"], CURRENT_SNAPSHOT_VERSION);
        assert_eq!(raw["items"], json!(["a", "b"]));
        assert!(raw["saved_at"].as_i64().unwrap() > 0);

        assert_eq!(slot.load().unwrap(), Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_legacy_bare_array_loads() {
        let kv = Arc::new(MemoryKvStore::new());
        kv.put("wishlist", br#"["x","y"]"#).unwrap();
        assert_eq!(
            slot(&kv).load().unwrap(),
            Some(vec!["x".to_string(), "y".to_string()])
        );
    }

    #[test]
    fn test_corrupted_snapshot() {
        let kv = Arc::new(MemoryKvStore::new());
        kv.put("wishlist", b"{not json").unwrap();
        let err = slot(&kv).load().unwrap_err();
        assert!(matches!(err, StorageError::Corrupted { ref key, .. } if key == "wishlist"));
        assert!(err.is_unreadable());
    }

    #[test]
    fn test_future_version_is_rejected() {
        let kv = Arc::new(MemoryKvStore::new());
        kv.put(
            "wishlist",
            br#"{"version":99,"saved_at":0,"items":["x"]}"#,
        )
        .unwrap();
        let err = slot(&kv).load().unwrap_err();
        assert!(matches!(err, StorageError::UnsupportedVersion { version: 99, .. }));
        assert!(err.is_unreadable());
    }

    #[test]
    fn test_restore_discards_unreadable_only() {
        let kv = Arc::new(MemoryKvStore::new());
        kv.put("wishlist", b"[1, 2").unwrap();
        assert!(slot(&kv).restore().unwrap().is_none());

        kv.put("wishlist", br#"["ok"]"#).unwrap();
        assert_eq!(slot(&kv).restore().unwrap(), Some(vec!["ok".to_string()]));
    }

    #[test]
    fn test_remove() {
        let kv = Arc::new(MemoryKvStore::new());
        let slot = slot(&kv);
        slot.save(&["a".to_string()]).unwrap();
        slot.remove().unwrap();
        assert!(slot.load().unwrap().is_none());
    }
}
