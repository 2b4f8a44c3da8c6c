use super::Notifier;
use shared::message::{Notification, NotificationLevel};
use tokio::sync::broadcast;

/// Default capacity of the broadcast channel
const DEFAULT_CAPACITY: usize = 256;

/// Notification bus - fans notifications out to every subscriber
///
/// Built on `tokio::sync::broadcast`: `send` is synchronous, never waits
/// for receivers and succeeds (as a no-op) when nobody is listening. Slow
/// subscribers lag and lose the oldest messages instead of blocking stores.
#[derive(Debug, Clone)]
pub struct NotificationBus {
    tx: broadcast::Sender<Notification>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Subscribe to notifications sent from now on
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationBus {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Normal => tracing::info!(
                kind = ?notification.kind,
                title = %notification.title,
                "{}",
                notification.description
            ),
            NotificationLevel::Destructive => tracing::warn!(
                kind = ?notification.kind,
                title = %notification.title,
                "{}",
                notification.description
            ),
        }

        // Err only means there are no receivers right now
        if self.tx.send(notification).is_err() {
            tracing::trace!("Notification dropped: no subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::message::NotificationKind;
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    fn test_notify_without_subscribers_is_harmless() {
        let bus = NotificationBus::new();
        assert_eq!(bus.subscriber_count(), 0);
        bus.notify(Notification::cart_cleared());
    }

    #[test]
    fn test_every_subscriber_receives() {
        let bus = NotificationBus::with_capacity(8);
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();

        bus.notify(Notification::item_added("Rose Bouquet"));

        assert_eq!(a.try_recv().unwrap().kind, NotificationKind::ItemAdded);
        assert_eq!(b.try_recv().unwrap().kind, NotificationKind::ItemAdded);
        assert!(matches!(a.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn test_slow_subscriber_lags_instead_of_blocking() {
        let bus = NotificationBus::with_capacity(2);
        let mut rx = bus.subscribe();

        for _ in 0..5 {
            bus.notify(Notification::cart_cleared());
        }

        assert!(matches!(rx.try_recv(), Err(TryRecvError::Lagged(3))));
        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_async_receive() {
        let bus = NotificationBus::new();
        let mut rx = bus.subscribe();
        bus.notify(Notification::wishlist_cleared());
        let n = rx.recv().await.unwrap();
        assert_eq!(n.kind, NotificationKind::WishlistCleared);
    }
}
