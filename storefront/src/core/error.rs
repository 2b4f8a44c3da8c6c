use crate::persistence::StorageError;
use shared::{AppError, ErrorCode};
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by store mutations
///
/// Business outcomes (out of stock, clamped quantity, duplicate wishlist
/// entry) are notifications, not errors. A store fails only when handed a
/// malformed product or when its snapshot could not be written.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid product: {0}")]
    InvalidProduct(#[from] AppError),

    #[error("Persistence failure: {0}")]
    Persistence(#[from] StorageError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidProduct(e) => e,
            StoreError::Persistence(StorageError::WriteRejected(msg)) => {
                AppError::with_message(ErrorCode::StorageFull, msg)
            }
            StoreError::Persistence(e) if e.is_unreadable() => {
                AppError::with_message(ErrorCode::StorageCorrupted, e.to_string())
            }
            StoreError::Persistence(e) => AppError::storage(e.to_string()),
        }
    }
}

/// Store operation result
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors while bringing the engine up
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Failed to create work dir {}: {source}", path.display())]
    WorkDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] AppError),

    #[error("Failed to open storage: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to restore store: {0}")]
    Store(#[from] StoreError),
}
