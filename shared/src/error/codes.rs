//! Unified error codes for the storefront
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 5xxx: Newsletter errors
//! - 6xxx: Product errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Required field missing
    RequiredField = 7,

    // ==================== 5xxx: Newsletter ====================
    /// Email already subscribed
    DuplicateSubscriber = 5001,
    /// Email address is malformed
    InvalidEmail = 5002,

    // ==================== 6xxx: Product ====================
    /// Category not found
    CategoryNotFound = 6002,
    /// Price is negative or not representable
    InvalidPrice = 6003,
    /// Product id already used
    DuplicateProductId = 6004,

    // ==================== 9xxx: System ====================
    /// Storage backend error
    StorageError = 9002,

    // ==================== 94xx: Storage ====================
    /// Storage full (quota exceeded)
    StorageFull = 9401,
    /// Stored snapshot could not be decoded
    StorageCorrupted = 9403,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::RequiredField => "Required field is missing",

            // Newsletter
            ErrorCode::DuplicateSubscriber => "Email is already subscribed",
            ErrorCode::InvalidEmail => "Email address is invalid",

            // Product
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::InvalidPrice => "Price must be a non-negative amount",
            ErrorCode::DuplicateProductId => "Product id already exists",

            // System
            ErrorCode::StorageError => "Storage error",
            ErrorCode::StorageFull => "Storage is full",
            ErrorCode::StorageCorrupted => "Stored data is corrupted",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            7 => Ok(ErrorCode::RequiredField),

            // Newsletter
            5001 => Ok(ErrorCode::DuplicateSubscriber),
            5002 => Ok(ErrorCode::InvalidEmail),

            // Product
            6002 => Ok(ErrorCode::CategoryNotFound),
            6003 => Ok(ErrorCode::InvalidPrice),
            6004 => Ok(ErrorCode::DuplicateProductId),

            // System
            9002 => Ok(ErrorCode::StorageError),

            // Storage
            9401 => Ok(ErrorCode::StorageFull),
            9403 => Ok(ErrorCode::StorageCorrupted),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
