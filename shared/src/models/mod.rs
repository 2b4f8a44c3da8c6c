//! Data models
//!
//! Shared between the storefront engine and the UI layer.
//! Field names serialize in camelCase so persisted snapshots keep the
//! layout the browser storefront wrote.

pub mod cart;
pub mod category;
pub mod product;
pub mod subscriber;

// Re-exports
pub use cart::*;
pub use category::*;
pub use product::*;
pub use subscriber::*;
