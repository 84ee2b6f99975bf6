//! 服务层 - 业务管理器
//!
//! Stateless managers over the shared SQLite pool. Every mutating sequence
//! runs through [`UnitOfWork::run`]; pure reads go straight to the pool.
//!
//! # 服务列表
//!
//! - [`PickupPointService`] - 自提点目录（删除受收货单引用保护）
//! - [`ReceptionService`] - 收货单生命周期（开单/关单，每个自提点最多一张打开的单）
//! - [`InventoryService`] - 收货单内货品（加货/批量加货/LIFO 撤货）

pub mod error;
pub mod inventory_service;
pub mod pickup_point_service;
pub mod reception_service;
pub mod uow;

pub use error::{ServiceError, ServiceResult};
pub use inventory_service::InventoryService;
pub use pickup_point_service::PickupPointService;
pub use reception_service::ReceptionService;
pub use uow::UnitOfWork;

#[cfg(test)]
mod tests;
