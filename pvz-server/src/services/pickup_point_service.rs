//! Pickup Point Directory (自提点目录)

use shared::models::{PickupPoint, PickupPointCreate, PickupPointUpdate};
use sqlx::SqlitePool;

use super::error::{ServiceError, ServiceResult};
use super::uow::UnitOfWork;
use crate::db::repository::{pickup_point, reception};

/// Directory of pickup points. Stateless; clones share the pool.
#[derive(Debug, Clone)]
pub struct PickupPointService {
    pool: SqlitePool,
    uow: UnitOfWork,
}

impl PickupPointService {
    pub fn new(pool: SqlitePool) -> Self {
        let uow = UnitOfWork::new(pool.clone());
        Self { pool, uow }
    }

    /// 创建自提点
    pub async fn create(&self, data: PickupPointCreate) -> ServiceResult<PickupPoint> {
        self.uow
            .run(move |conn| {
                Box::pin(async move { Ok(pickup_point::create(&mut *conn, data).await?) })
            })
            .await
    }

    /// 查询自提点（纯读）
    pub async fn get_by_id(&self, id: i64) -> ServiceResult<PickupPoint> {
        pickup_point::find_by_id(&self.pool, id)
            .await?
            .ok_or(ServiceError::PickupPointNotFound(id))
    }

    /// 自提点列表（纯读，分页）
    pub async fn list(&self, limit: i32, offset: i32) -> ServiceResult<Vec<PickupPoint>> {
        Ok(pickup_point::find_all(&self.pool, limit, offset).await?)
    }

    /// 更新自提点标签
    pub async fn update(&self, id: i64, data: PickupPointUpdate) -> ServiceResult<PickupPoint> {
        self.uow
            .run(move |conn| {
                Box::pin(async move {
                    pickup_point::update(&mut *conn, id, data)
                        .await?
                        .ok_or(ServiceError::PickupPointNotFound(id))
                })
            })
            .await
    }

    /// 删除自提点：仍有收货单引用时拒绝，不做级联
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.uow
            .run(move |conn| {
                Box::pin(async move {
                    if pickup_point::find_by_id(&mut *conn, id).await?.is_none() {
                        return Err(ServiceError::PickupPointNotFound(id));
                    }
                    let refs = reception::count_by_pickup_point(&mut *conn, id).await?;
                    if refs > 0 {
                        return Err(ServiceError::PickupPointHasReceptions(id));
                    }
                    pickup_point::delete(&mut *conn, id).await?;
                    Ok(())
                })
            })
            .await
    }
}
