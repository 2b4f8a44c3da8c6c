//! Fixtures for unit tests

use crate::message::{NotificationBus, NotificationKind, Notifier};
use crate::persistence::{KvStore, MemoryKvStore, Slot};
use rust_decimal::Decimal;
use shared::{Notification, Product};
use std::sync::Arc;
use tokio::sync::broadcast;

pub fn product(id: &str, inventory_count: u32, price: Decimal) -> Product {
    Product {
        id: id.into(),
        name: format!("Product {id}"),
        description: "Handmade".into(),
        price,
        category: "keychain".into(),
        image_url: "/placeholder.svg".into(),
        inventory_count,
        featured: false,
    }
}

pub struct Harness {
    pub kv: Arc<MemoryKvStore>,
    pub bus: NotificationBus,
    pub rx: broadcast::Receiver<Notification>,
}

impl Harness {
    pub fn new() -> Self {
        let bus = NotificationBus::with_capacity(64);
        let rx = bus.subscribe();
        Self {
            kv: Arc::new(MemoryKvStore::new()),
            bus,
            rx,
        }
    }

    pub fn slot<T>(&self, key: &str) -> Slot<T>
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
    {
        Slot::new(self.kv.clone() as Arc<dyn KvStore>, key)
    }

    pub fn notifier(&self) -> Arc<dyn Notifier> {
        Arc::new(self.bus.clone())
    }

    /// Kinds of every notification received since the last call
    pub fn drain(&mut self) -> Vec<NotificationKind> {
        let mut kinds = Vec::new();
        while let Ok(n) = self.rx.try_recv() {
            kinds.push(n.kind);
        }
        kinds
    }

    /// Full notifications received since the last call
    pub fn drain_full(&mut self) -> Vec<Notification> {
        let mut all = Vec::new();
        while let Ok(n) = self.rx.try_recv() {
            all.push(n);
        }
        all
    }
}
