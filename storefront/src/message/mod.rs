//! Notification delivery
//!
//! ```text
//! ┌──────────────┐   notify()   ┌───────────────────────────────┐
//! │ CartStore    │ ───────────▶ │        NotificationBus        │
//! │ WishlistStore│              │  broadcast::Sender<Notification>
//! │ InventoryBook│              └───────────────┬───────────────┘
//! └──────────────┘                              │ subscribe()
//!                                     ┌─────────┴─────────┐
//!                                     ▼                   ▼
//!                                 UI toasts          log drain
//! ```
//!
//! Stores only see the [`Notifier`] trait: sending is fire-and-forget and
//! never blocks the calling operation.

mod bus;

pub use bus::NotificationBus;
pub use shared::message::{Notification, NotificationKind, NotificationLevel};

/// Sink for user-facing notifications
pub trait Notifier: Send + Sync {
    /// Deliver a notification. Must not block and must not fail the caller.
    fn notify(&self, notification: Notification);
}
