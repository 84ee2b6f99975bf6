//! Unified error codes for the PVZ backend
//!
//! This module defines all error codes used across pvz-server and clients.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Pickup point errors
//! - 2xxx: Reception errors
//! - 3xxx: Product errors
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
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Pickup point ====================
    /// Pickup point not found
    PickupPointNotFound = 1001,
    /// Pickup point still has receptions
    PickupPointHasReceptions = 1002,

    // ==================== 2xxx: Reception ====================
    /// Reception not found
    ReceptionNotFound = 2001,
    /// Pickup point already has an in-progress reception
    ReceptionAlreadyOpen = 2002,
    /// Pickup point has no in-progress reception
    NoOpenReception = 2003,
    /// Reception has already been closed
    ReceptionAlreadyClosed = 2004,

    // ==================== 3xxx: Product ====================
    /// Product not found
    ProductNotFound = 3001,
    /// Product type is not one of the supported kinds
    InvalidProductType = 3002,
    /// Reception has no products left to remove
    NoProductsToRemove = 3003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Transaction commit failed
    CommitFailed = 9003,
    /// Transaction rollback failed
    RollbackFailed = 9004,
    /// Configuration error
    ConfigError = 9005,
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
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",

            // Pickup point
            ErrorCode::PickupPointNotFound => "Pickup point not found",
            ErrorCode::PickupPointHasReceptions => "Pickup point still has receptions",

            // Reception
            ErrorCode::ReceptionNotFound => "Reception not found",
            ErrorCode::ReceptionAlreadyOpen => {
                "Pickup point already has an in-progress reception"
            }
            ErrorCode::NoOpenReception => "Pickup point has no in-progress reception",
            ErrorCode::ReceptionAlreadyClosed => "Reception has already been closed",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::InvalidProductType => "Invalid product type",
            ErrorCode::NoProductsToRemove => "Reception has no products to remove",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::CommitFailed => "Transaction commit failed",
            ErrorCode::RollbackFailed => "Transaction rollback failed",
            ErrorCode::ConfigError => "Configuration error",
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
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),

            // Pickup point
            1001 => Ok(ErrorCode::PickupPointNotFound),
            1002 => Ok(ErrorCode::PickupPointHasReceptions),

            // Reception
            2001 => Ok(ErrorCode::ReceptionNotFound),
            2002 => Ok(ErrorCode::ReceptionAlreadyOpen),
            2003 => Ok(ErrorCode::NoOpenReception),
            2004 => Ok(ErrorCode::ReceptionAlreadyClosed),

            // Product
            3001 => Ok(ErrorCode::ProductNotFound),
            3002 => Ok(ErrorCode::InvalidProductType),
            3003 => Ok(ErrorCode::NoProductsToRemove),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::CommitFailed),
            9004 => Ok(ErrorCode::RollbackFailed),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
