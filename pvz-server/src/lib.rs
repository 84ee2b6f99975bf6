//! PVZ Server - 自提点收货管理后台
//!
//! # 架构概述
//!
//! 本模块是 PVZ 后台的主入口，提供以下核心功能：
//!
//! - **自提点目录** (`services/pickup_point_service`): 自提点的创建与维护
//! - **收货单生命周期** (`services/reception_service`): 开单/关单状态机，
//!   每个自提点同一时刻最多一张打开的收货单
//! - **收货单内货品** (`services/inventory_service`): 加货、批量加货、
//!   LIFO 撤货
//! - **工作单元** (`services/uow`): 所有变更序列的事务协调器
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! pvz-server/src/
//! ├── core/          # 配置、状态、服务器、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 业务管理器 + 工作单元
//! ├── db/            # SQLite 连接池、迁移、仓储层
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use services::{InventoryService, PickupPointService, ReceptionService, UnitOfWork};
pub use services::{ServiceError, ServiceResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____ _    ______
   / __ \ |  / /__  /
  / /_/ / | / /  / /
 / ____/| |/ /  / /__
/_/     |___/  /____/
    "#
    );
}
