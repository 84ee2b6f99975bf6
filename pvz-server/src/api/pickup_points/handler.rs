//! Pickup Point API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::validation::{
    DEFAULT_PAGE_LIMIT, MAX_LABEL_LEN, clamp_page, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{PickupPoint, PickupPointCreate, PickupPointUpdate, Reception};

/// Query params for list endpoints
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

/// GET /api/pickup-points - 自提点列表 (按标签排序，分页)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<PickupPoint>>> {
    let (limit, offset) = clamp_page(query.limit, query.offset);
    let points = state.pickup_points.list(limit, offset).await?;
    Ok(Json(points))
}

/// GET /api/pickup-points/:id - 获取单个自提点
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PickupPoint>> {
    let point = state.pickup_points.get_by_id(id).await?;
    Ok(Json(point))
}

/// POST /api/pickup-points - 创建自提点
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PickupPointCreate>,
) -> AppResult<Json<PickupPoint>> {
    validate_required_text(&payload.label, "label", MAX_LABEL_LEN)?;

    let point = state.pickup_points.create(payload).await?;
    Ok(Json(point))
}

/// PUT /api/pickup-points/:id - 更新自提点标签
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PickupPointUpdate>,
) -> AppResult<Json<PickupPoint>> {
    validate_optional_text(&payload.label, "label", MAX_LABEL_LEN)?;

    let point = state.pickup_points.update(id, payload).await?;
    Ok(Json(point))
}

/// DELETE /api/pickup-points/:id - 删除自提点 (仍有收货单引用时 409)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    state.pickup_points.delete(id).await?;
    Ok(Json(true))
}

/// GET /api/pickup-points/:id/receptions - 自提点的收货单列表 (新单在前)
pub async fn list_receptions(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Reception>>> {
    let (limit, offset) = clamp_page(query.limit, query.offset);
    let receptions = state.receptions.list_by_pickup_point(id, limit, offset).await?;
    Ok(Json(receptions))
}

/// GET /api/pickup-points/:id/receptions/current - 当前打开的收货单
///
/// 没有打开的收货单时返回 404（通用 NotFound，不是业务冲突错误）。
pub async fn current_reception(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Reception>> {
    let current = state.receptions.current_open(id).await?;
    match current {
        Some(reception) => Ok(Json(reception)),
        None => Err(AppError::with_message(
            ErrorCode::NotFound,
            format!("Pickup point {} has no open reception", id),
        )),
    }
}

/// POST /api/pickup-points/:id/receptions/close - 关闭当前收货单
///
/// 没有打开的收货单时返回 NoOpenReception（非幂等）。
pub async fn close_reception(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Reception>> {
    let closed = state.receptions.close(id).await?;
    Ok(Json(closed))
}
