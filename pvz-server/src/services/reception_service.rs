//! Reception Lifecycle Manager (收货单生命周期)
//!
//! A reception moves `IN_PROGRESS → CLOSED` exactly once; `CLOSED` is
//! terminal. At most one reception per pickup point may be open at any
//! moment. The invariant is held by the store's partial unique index, not by
//! in-process locks — this service only sequences the checks inside one
//! transaction and translates the index violation into the business error.

use shared::models::Reception;
use sqlx::SqlitePool;

use super::error::{ServiceError, ServiceResult};
use super::uow::UnitOfWork;
use crate::db::repository::{pickup_point, reception, RepoError};

/// Reception lifecycle manager. Stateless; clones share the pool.
#[derive(Debug, Clone)]
pub struct ReceptionService {
    pool: SqlitePool,
    uow: UnitOfWork,
}

impl ReceptionService {
    pub fn new(pool: SqlitePool) -> Self {
        let uow = UnitOfWork::new(pool.clone());
        Self { pool, uow }
    }

    /// 开单。该自提点已有打开的收货单时失败，不返回已存在的单。
    pub async fn open(&self, pickup_point_id: i64) -> ServiceResult<Reception> {
        self.uow
            .run(move |conn| {
                Box::pin(async move {
                    if pickup_point::find_by_id(&mut *conn, pickup_point_id)
                        .await?
                        .is_none()
                    {
                        return Err(ServiceError::PickupPointNotFound(pickup_point_id));
                    }
                    if reception::find_open_by_pickup_point(&mut *conn, pickup_point_id)
                        .await?
                        .is_some()
                    {
                        return Err(ServiceError::ReceptionAlreadyOpen(pickup_point_id));
                    }
                    match reception::create(&mut *conn, pickup_point_id).await {
                        Ok(r) => Ok(r),
                        // 并发竞争时部分唯一索引兜底，同样按"已有打开收货单"上报
                        Err(RepoError::Duplicate(_)) => {
                            Err(ServiceError::ReceptionAlreadyOpen(pickup_point_id))
                        }
                        Err(e) => Err(e.into()),
                    }
                })
            })
            .await
    }

    /// 关单。没有打开的收货单时失败（重复关单同样失败，不做幂等）。
    pub async fn close(&self, pickup_point_id: i64) -> ServiceResult<Reception> {
        self.uow
            .run(move |conn| {
                Box::pin(async move {
                    if pickup_point::find_by_id(&mut *conn, pickup_point_id)
                        .await?
                        .is_none()
                    {
                        return Err(ServiceError::PickupPointNotFound(pickup_point_id));
                    }
                    let open = reception::find_open_by_pickup_point(&mut *conn, pickup_point_id)
                        .await?
                        .ok_or(ServiceError::NoOpenReception(pickup_point_id))?;
                    // 守卫 UPDATE 返回 0 行说明已被并发关闭
                    reception::close(&mut *conn, open.id)
                        .await?
                        .ok_or(ServiceError::NoOpenReception(pickup_point_id))
                })
            })
            .await
    }

    /// 查询收货单（纯读）
    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Reception> {
        reception::find_by_id(&self.pool, id)
            .await?
            .ok_or(ServiceError::ReceptionNotFound(id))
    }

    /// 收货单列表（纯读，分页，新单在前）
    pub async fn list(&self, limit: i32, offset: i32) -> ServiceResult<Vec<Reception>> {
        Ok(reception::find_all(&self.pool, limit, offset).await?)
    }

    /// 某自提点的收货单列表（纯读，分页）
    pub async fn list_by_pickup_point(
        &self,
        pickup_point_id: i64,
        limit: i32,
        offset: i32,
    ) -> ServiceResult<Vec<Reception>> {
        if pickup_point::find_by_id(&self.pool, pickup_point_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::PickupPointNotFound(pickup_point_id));
        }
        Ok(reception::find_by_pickup_point(&self.pool, pickup_point_id, limit, offset).await?)
    }

    /// 当前打开的收货单（纯读）。`None` 表示没有打开的单，不是错误。
    pub async fn current_open(&self, pickup_point_id: i64) -> ServiceResult<Option<Reception>> {
        if pickup_point::find_by_id(&self.pool, pickup_point_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::PickupPointNotFound(pickup_point_id));
        }
        Ok(reception::find_open_by_pickup_point(&self.pool, pickup_point_id).await?)
    }
}
