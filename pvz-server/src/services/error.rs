//! Service-layer error type
//!
//! `ServiceError` carries one variant per stable business condition, plus the
//! transactional failure modes of the unit of work. Handlers convert it into
//! an [`AppError`] (and thus the JSON envelope) through the `From` impl below,
//! so service code propagates with `?` and never touches HTTP concerns.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::db::repository::RepoError;

/// Business and transactional failures of the service layer
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Pickup point not found: {0}")]
    PickupPointNotFound(i64),

    #[error("Pickup point still has receptions: {0}")]
    PickupPointHasReceptions(i64),

    #[error("Reception not found: {0}")]
    ReceptionNotFound(i64),

    #[error("Reception already open for pickup point: {0}")]
    ReceptionAlreadyOpen(i64),

    #[error("No open reception for pickup point: {0}")]
    NoOpenReception(i64),

    #[error("Reception already closed: {0}")]
    ReceptionAlreadyClosed(i64),

    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    #[error("Invalid product type: {0}")]
    InvalidProductType(String),

    #[error("No products to remove in reception: {0}")]
    NoProductsToRemove(i64),

    /// Commit 失败后效果不保证已生效
    #[error("Commit failed: {0}")]
    CommitFailed(String),

    /// Rollback 失败后存储状态未知，携带原始业务错误一起上报
    #[error("Rollback failed: {rollback} (while handling: {original})")]
    RollbackFailed {
        rollback: String,
        original: Box<ServiceError>,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] RepoError),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        let message = err.to_string();
        match err {
            ServiceError::PickupPointNotFound(id) => {
                AppError::with_message(ErrorCode::PickupPointNotFound, message)
                    .with_detail("pickup_point_id", id)
            }
            ServiceError::PickupPointHasReceptions(id) => {
                AppError::with_message(ErrorCode::PickupPointHasReceptions, message)
                    .with_detail("pickup_point_id", id)
            }
            ServiceError::ReceptionNotFound(id) => {
                AppError::with_message(ErrorCode::ReceptionNotFound, message)
                    .with_detail("reception_id", id)
            }
            ServiceError::ReceptionAlreadyOpen(id) => {
                AppError::with_message(ErrorCode::ReceptionAlreadyOpen, message)
                    .with_detail("pickup_point_id", id)
            }
            ServiceError::NoOpenReception(id) => {
                AppError::with_message(ErrorCode::NoOpenReception, message)
                    .with_detail("pickup_point_id", id)
            }
            ServiceError::ReceptionAlreadyClosed(id) => {
                AppError::with_message(ErrorCode::ReceptionAlreadyClosed, message)
                    .with_detail("reception_id", id)
            }
            ServiceError::ProductNotFound(id) => {
                AppError::with_message(ErrorCode::ProductNotFound, message)
                    .with_detail("product_id", id)
            }
            ServiceError::InvalidProductType(t) => {
                AppError::with_message(ErrorCode::InvalidProductType, message)
                    .with_detail("type", t)
            }
            ServiceError::NoProductsToRemove(id) => {
                AppError::with_message(ErrorCode::NoProductsToRemove, message)
                    .with_detail("reception_id", id)
            }
            ServiceError::CommitFailed(_) => {
                AppError::with_message(ErrorCode::CommitFailed, message)
            }
            ServiceError::RollbackFailed { .. } => {
                AppError::with_message(ErrorCode::RollbackFailed, message)
            }
            ServiceError::Storage(e) => {
                tracing::error!(error = %e, "Service storage error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;
