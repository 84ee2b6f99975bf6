//! Data models
//!
//! Shared between pvz-server and clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod pickup_point;
pub mod product;
pub mod reception;

// Re-exports
pub use pickup_point::*;
pub use product::*;
pub use reception::*;
