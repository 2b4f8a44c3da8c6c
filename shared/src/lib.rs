//! Shared types for the storefront
//!
//! Plain data types used by the storefront engine and any UI layer that
//! sits on top of it: catalog models, cart lines, notification payloads,
//! the unified error system and small utilities.

pub mod error;
pub mod message;
pub mod models;
pub mod util;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use message::{Notification, NotificationKind, NotificationLevel};
pub use models::{CartLine, Category, Product, ProductDraft, Subscriber};
