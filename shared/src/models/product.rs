//! Product Model (货品)
//!
//! Products are immutable once registered; the only removal path is
//! last-in-first-out via the inventory service. Removal order is defined
//! by the explicit ordering key `(created_at, seq)` — `seq` is a storage
//! counter that breaks ties between products registered in the same
//! millisecond. Physical row order is never relied on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product type — closed set, anything else is rejected at the service layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ProductType {
    Electronics,
    Clothing,
    Food,
    Other,
}

impl ProductType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Clothing => "clothing",
            Self::Food => "food",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown product type string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown product type: {0}")]
pub struct UnknownProductType(pub String);

impl FromStr for ProductType {
    type Err = UnknownProductType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electronics" => Ok(Self::Electronics),
            "clothing" => Ok(Self::Clothing),
            "food" => Ok(Self::Food),
            "other" => Ok(Self::Other),
            other => Err(UnknownProductType(other.to_string())),
        }
    }
}

/// Product record — one received item inside a reception
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    /// Storage insertion counter, tie-breaker of the LIFO ordering key
    pub seq: i64,
    /// Public snowflake ID
    pub id: i64,
    pub reception_id: i64,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "db", sqlx(rename = "type"))]
    pub product_type: ProductType,
    /// Registration time (Unix millis)
    pub created_at: i64,
}

/// Register product payload (type as raw string, validated in the core)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub reception_id: i64,
    #[serde(rename = "type")]
    pub product_type: String,
}

/// Register a batch of products in one atomic write
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductBatchCreate {
    pub reception_id: i64,
    pub types: Vec<String>,
}
