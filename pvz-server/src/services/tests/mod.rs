use super::*;
use crate::db::DbService;
use shared::models::{PickupPointCreate, PickupPointUpdate, ProductType, ReceptionStatus};
use sqlx::SqlitePool;
use tempfile::TempDir;

// ========================================================================
// Test fixtures: 每个测试一个独立的临时数据库
// ========================================================================

/// 打开临时库并跑完迁移；TempDir 必须活到测试结束
async fn open_test_db() -> (TempDir, SqlitePool) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = DbService::new(db_path.to_str().unwrap(), 5).await.unwrap();
    (dir, db.pool.clone())
}

/// 建一个自提点，返回 id
async fn seed_pickup_point(pool: &SqlitePool, label: &str) -> i64 {
    PickupPointService::new(pool.clone())
        .create(PickupPointCreate {
            label: label.to_string(),
        })
        .await
        .unwrap()
        .id
}

/// 开单并逐件加货，返回收货单 id
async fn open_with_products(pool: &SqlitePool, pickup_point_id: i64, types: &[&str]) -> i64 {
    let receptions = ReceptionService::new(pool.clone());
    let inventory = InventoryService::new(pool.clone());
    let r = receptions.open(pickup_point_id).await.unwrap();
    for t in types {
        inventory.add_one(r.id, t).await.unwrap();
    }
    r.id
}

mod test_directory;
mod test_inventory;
