//! Utilities - logging, money arithmetic, input validation, CSV export

pub mod csv;
pub mod logger;
pub mod money;
pub mod validation;

pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode};
