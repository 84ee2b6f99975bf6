//! Input validation helpers
//!
//! Centralized length/size constants and validation functions for the HTTP
//! layer. Handlers validate payload shape here; the closed product-type set
//! is validated in the service core, not here.

use shared::error::AppError;

// ── Limits ──────────────────────────────────────────────────────────

/// Pickup point labels (street address, city, branch name)
pub const MAX_LABEL_LEN: usize = 200;

/// Products per batch registration
pub const MAX_BATCH_SIZE: usize = 1000;

/// Page size ceiling for list endpoints
pub const MAX_PAGE_LIMIT: i32 = 500;

/// Page size when the query string does not carry one
pub const DEFAULT_PAGE_LIMIT: i32 = 50;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is non-empty and within the
/// length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        validate_required_text(v, field, max_len)?;
    }
    Ok(())
}

/// Validate a batch type list: non-empty and within the size limit.
/// The service layer treats an empty batch as a no-op; the HTTP boundary
/// rejects it outright.
pub fn validate_batch(types: &[String]) -> Result<(), AppError> {
    if types.is_empty() {
        return Err(AppError::validation("types must not be empty"));
    }
    if types.len() > MAX_BATCH_SIZE {
        return Err(AppError::validation(format!(
            "types has too many entries ({}, max {MAX_BATCH_SIZE})",
            types.len()
        )));
    }
    Ok(())
}

/// Clamp pagination params to sane bounds: limit into `1..=MAX_PAGE_LIMIT`,
/// offset to non-negative.
pub fn clamp_page(limit: i32, offset: i32) -> (i32, i32) {
    (limit.clamp(1, MAX_PAGE_LIMIT), offset.max(0))
}
