//! Inventory Manager (收货单内货品)
//!
//! Products can only be registered into an `IN_PROGRESS` reception, and only
//! the most recently added product can be retracted (strict LIFO over the
//! `(created_at, seq)` ordering key — there is no random-access delete).
//! Type validation happens here, against the closed [`ProductType`] set;
//! payloads carry plain strings.

use shared::models::{Product, ProductType};
use sqlx::SqlitePool;

use super::error::{ServiceError, ServiceResult};
use super::uow::UnitOfWork;
use crate::db::repository::{product, reception};

/// Inventory manager. Stateless; clones share the pool.
#[derive(Debug, Clone)]
pub struct InventoryService {
    pool: SqlitePool,
    uow: UnitOfWork,
}

impl InventoryService {
    pub fn new(pool: SqlitePool) -> Self {
        let uow = UnitOfWork::new(pool.clone());
        Self { pool, uow }
    }

    /// 加一件货品
    pub async fn add_one(&self, reception_id: i64, type_str: &str) -> ServiceResult<Product> {
        let type_str = type_str.to_owned();
        self.uow
            .run(move |conn| {
                Box::pin(async move {
                    let r = reception::find_by_id(&mut *conn, reception_id)
                        .await?
                        .ok_or(ServiceError::ReceptionNotFound(reception_id))?;
                    if !r.is_open() {
                        return Err(ServiceError::ReceptionAlreadyClosed(reception_id));
                    }
                    let product_type = parse_type(&type_str)?;
                    Ok(product::create(&mut *conn, reception_id, product_type).await?)
                })
            })
            .await
    }

    /// 批量加货：先整体校验类型，再用一条多行 INSERT 写入。
    /// 任何一个类型非法时整批拒绝，零行写入。
    pub async fn add_batch(
        &self,
        reception_id: i64,
        types: &[String],
    ) -> ServiceResult<Vec<Product>> {
        let types = types.to_vec();
        self.uow
            .run(move |conn| {
                Box::pin(async move {
                    let r = reception::find_by_id(&mut *conn, reception_id)
                        .await?
                        .ok_or(ServiceError::ReceptionNotFound(reception_id))?;
                    if !r.is_open() {
                        return Err(ServiceError::ReceptionAlreadyClosed(reception_id));
                    }
                    let mut parsed = Vec::with_capacity(types.len());
                    for raw in &types {
                        parsed.push(parse_type(raw)?);
                    }
                    Ok(product::create_batch(&mut *conn, reception_id, &parsed).await?)
                })
            })
            .await
    }

    /// 按 LIFO 撤掉最后登记的货品，返回被撤的那件
    pub async fn remove_last(&self, reception_id: i64) -> ServiceResult<Product> {
        self.uow
            .run(move |conn| {
                Box::pin(async move {
                    let r = reception::find_by_id(&mut *conn, reception_id)
                        .await?
                        .ok_or(ServiceError::ReceptionNotFound(reception_id))?;
                    if !r.is_open() {
                        return Err(ServiceError::ReceptionAlreadyClosed(reception_id));
                    }
                    product::delete_last(&mut *conn, reception_id)
                        .await?
                        .ok_or(ServiceError::NoProductsToRemove(reception_id))
                })
            })
            .await
    }

    /// 收货单内货品列表（纯读，登记顺序，可为空）
    pub async fn list_by_reception(&self, reception_id: i64) -> ServiceResult<Vec<Product>> {
        if reception::find_by_id(&self.pool, reception_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::ReceptionNotFound(reception_id));
        }
        Ok(product::find_by_reception(&self.pool, reception_id).await?)
    }

    /// 最后登记的货品（纯读）。`None` 表示收货单为空。
    pub async fn last_in_reception(&self, reception_id: i64) -> ServiceResult<Option<Product>> {
        if reception::find_by_id(&self.pool, reception_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::ReceptionNotFound(reception_id));
        }
        Ok(product::find_last_in_reception(&self.pool, reception_id).await?)
    }

    /// 按 ID 查货品（纯读）
    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Product> {
        product::find_by_id(&self.pool, id)
            .await?
            .ok_or(ServiceError::ProductNotFound(id))
    }
}

/// 把请求里的字符串类型解析成封闭枚举
fn parse_type(raw: &str) -> Result<ProductType, ServiceError> {
    raw.parse::<ProductType>()
        .map_err(|e| ServiceError::InvalidProductType(e.0))
}
