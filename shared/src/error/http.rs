//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::PickupPointNotFound
            | Self::ReceptionNotFound
            | Self::ProductNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict (state-machine rejections: the request is well
            // formed but the current state forbids it)
            Self::AlreadyExists
            | Self::PickupPointHasReceptions
            | Self::ReceptionAlreadyOpen
            | Self::NoOpenReception
            | Self::ReceptionAlreadyClosed
            | Self::NoProductsToRemove => StatusCode::CONFLICT,

            // 500 Internal Server Error
            Self::InternalError
            | Self::DatabaseError
            | Self::CommitFailed
            | Self::RollbackFailed
            | Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
