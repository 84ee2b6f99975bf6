//! Pickup Point Model (自提点)

use serde::{Deserialize, Serialize};

/// Pickup point entity — a physical location that receives goods
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PickupPoint {
    pub id: i64,
    /// Display label, e.g. city or street name
    pub label: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create pickup point payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupPointCreate {
    pub label: String,
}

/// Update pickup point payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupPointUpdate {
    pub label: Option<String>,
}
