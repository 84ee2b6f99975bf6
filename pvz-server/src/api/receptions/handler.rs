//! Reception API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::validation::{DEFAULT_PAGE_LIMIT, clamp_page};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Product, Reception, ReceptionOpen};

/// Query params for listing receptions
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i32,
    #[serde(default)]
    pub offset: i32,
}

fn default_limit() -> i32 {
    DEFAULT_PAGE_LIMIT
}

/// GET /api/receptions - 收货单列表 (新单在前，分页)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Reception>>> {
    let (limit, offset) = clamp_page(query.limit, query.offset);
    let receptions = state.receptions.list(limit, offset).await?;
    Ok(Json(receptions))
}

/// GET /api/receptions/:id - 获取单个收货单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Reception>> {
    let reception = state.receptions.get_by_id(id).await?;
    Ok(Json(reception))
}

/// POST /api/receptions - 开单
///
/// 该自提点已有打开的收货单时返回 ReceptionAlreadyOpen (409)。
pub async fn open(
    State(state): State<ServerState>,
    Json(payload): Json<ReceptionOpen>,
) -> AppResult<Json<Reception>> {
    let reception = state.receptions.open(payload.pickup_point_id).await?;
    Ok(Json(reception))
}

/// GET /api/receptions/:id/products - 收货单内货品列表 (登记顺序)
pub async fn list_products(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.inventory.list_by_reception(id).await?;
    Ok(Json(products))
}

/// GET /api/receptions/:id/products/last - 最后登记的货品
///
/// 收货单为空时返回 404（通用 NotFound，不是业务冲突错误）。
pub async fn last_product(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let last = state.inventory.last_in_reception(id).await?;
    match last {
        Some(product) => Ok(Json(product)),
        None => Err(AppError::with_message(
            ErrorCode::NotFound,
            format!("Reception {} has no products", id),
        )),
    }
}

/// DELETE /api/receptions/:id/products/last - LIFO 撤掉最后登记的货品
///
/// 返回被撤掉的货品；收货单为空时返回 NoProductsToRemove (409)。
pub async fn remove_last_product(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let removed = state.inventory.remove_last(id).await?;
    Ok(Json(removed))
}
