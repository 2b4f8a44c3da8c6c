//! User-facing notification messages
//!
//! Every state-changing store operation reports its outcome through one
//! [`Notification`]. The UI layer renders them as toasts; the engine only
//! produces them.

pub mod payload;
pub use payload::*;
