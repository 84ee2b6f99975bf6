use sqlx::SqlitePool;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::services::{InventoryService, PickupPointService, ReceptionService};

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 是 PVZ 后台的核心数据结构。服务本身无状态，
/// 全部建立在同一个 SQLite 连接池之上，Clone 成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
/// | epoch | String | 启动实例标识 |
/// | pickup_points | PickupPointService | 自提点目录 |
/// | receptions | ReceptionService | 收货单生命周期 |
/// | inventory | InventoryService | 收货单内货品 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    /// Server instance epoch - unique ID generated on startup.
    /// Clients use it to detect server restarts.
    pub epoch: String,
    /// 自提点目录
    pub pickup_points: PickupPointService,
    /// 收货单生命周期
    pub receptions: ReceptionService,
    /// 收货单内货品
    pub inventory: InventoryService,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database/pvz.db，含迁移)
    /// 3. 各业务服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| ServerError::Config(format!("failed to create work dir structure: {e}")))?;

        let db_path = config.database_dir().join("pvz.db");
        let db = DbService::new(&db_path.to_string_lossy(), config.db_max_connections).await?;

        Ok(Self::with_pool(config.clone(), db.pool))
    }

    /// 基于现有连接池构造状态
    ///
    /// 测试场景直接用临时库的池，跳过工作目录初始化
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::info!(epoch = %epoch, "Server state initialized with new epoch");

        Self {
            config,
            pool: pool.clone(),
            epoch,
            pickup_points: PickupPointService::new(pool.clone()),
            receptions: ReceptionService::new(pool.clone()),
            inventory: InventoryService::new(pool),
        }
    }
}
