//! Core - configuration, application state and error types
//!
//! - [`Config`] - environment driven configuration
//! - [`StorefrontState`] - every store, wired once at start-up
//! - [`StoreError`] - store mutation failures

pub mod config;
pub mod error;
pub mod state;

pub use config::Config;
pub use error::{StartupError, StoreError, StoreResult};
pub use state::StorefrontState;
