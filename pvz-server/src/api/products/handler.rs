//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::validate_batch;
use shared::models::{Product, ProductBatchCreate, ProductCreate};

/// GET /api/products/:id - 获取单个货品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let product = state.inventory.get_by_id(id).await?;
    Ok(Json(product))
}

/// POST /api/products - 登记一件货品
///
/// 类型必须属于封闭集合 (electronics | clothing | food | other)，
/// 否则返回 InvalidProductType (400)；收货单已关闭时返回
/// ReceptionAlreadyClosed (409)。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    let product = state
        .inventory
        .add_one(payload.reception_id, &payload.product_type)
        .await?;
    Ok(Json(product))
}

/// POST /api/products/batch - 批量登记货品 (整批成功或整批失败)
pub async fn create_batch(
    State(state): State<ServerState>,
    Json(payload): Json<ProductBatchCreate>,
) -> AppResult<Json<Vec<Product>>> {
    validate_batch(&payload.types)?;

    let products = state
        .inventory
        .add_batch(payload.reception_id, &payload.types)
        .await?;
    Ok(Json(products))
}
