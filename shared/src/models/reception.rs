//! Reception Model (收货单)
//!
//! A reception is a goods-intake session at a pickup point. At most one
//! reception per pickup point may be `IN_PROGRESS` at any moment; the
//! store enforces this with a partial unique index.

use serde::{Deserialize, Serialize};

/// Reception status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ReceptionStatus {
    InProgress,
    Closed,
}

impl Default for ReceptionStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Reception record — one goods-intake session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reception {
    pub id: i64,
    pub pickup_point_id: i64,
    /// `IN_PROGRESS` until closed; `CLOSED` is terminal
    pub status: ReceptionStatus,
    /// Open time (Unix millis)
    pub created_at: i64,
    /// Close time (Unix millis), null while open
    pub closed_at: Option<i64>,
}

impl Reception {
    /// Whether this reception still accepts products
    pub fn is_open(&self) -> bool {
        self.status == ReceptionStatus::InProgress
    }
}

/// Open reception payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceptionOpen {
    pub pickup_point_id: i64,
}
