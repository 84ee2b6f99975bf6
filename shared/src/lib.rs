//! Shared types for the PVZ administration backend
//!
//! Common types used by server and client crates: domain models,
//! error codes, response structures, and ID/time utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

// Error system re-exports (for convenient access)
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
