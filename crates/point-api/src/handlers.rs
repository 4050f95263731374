//! 积分 REST API 处理器
//!
//! 每个处理器只做参数提取与 DTO 转换，业务规则全部由核心服务执行。

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use crate::{
    dto::{ApiResponse, PointHistoryDto, UserPointDto},
    error::ApiError,
    state::AppState,
};

/// 查询用户积分
///
/// GET /point/{id}
#[instrument(skip(state))]
pub async fn get_point(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<ApiResponse<UserPointDto>> {
    let entry = state.service.get_balance(id);
    Json(ApiResponse::success(entry.into()))
}

/// 查询用户积分流水，按提交顺序返回
///
/// GET /point/{id}/histories
#[instrument(skip(state))]
pub async fn get_histories(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<ApiResponse<Vec<PointHistoryDto>>> {
    let records = state
        .service
        .get_history(id)
        .into_iter()
        .map(PointHistoryDto::from)
        .collect();
    Json(ApiResponse::success(records))
}

/// 充值积分
///
/// PATCH /point/{id}/charge，请求体为裸 JSON 数字
#[instrument(skip(state))]
pub async fn charge(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(amount): Json<i64>,
) -> Result<Json<ApiResponse<UserPointDto>>, ApiError> {
    let entry = state.service.charge(id, amount).await?;
    Ok(Json(ApiResponse::success(entry.into())))
}

/// 使用积分
///
/// PATCH /point/{id}/use，请求体为裸 JSON 数字
#[instrument(skip(state))]
pub async fn use_points(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(amount): Json<i64>,
) -> Result<Json<ApiResponse<UserPointDto>>, ApiError> {
    let entry = state.service.use_points(id, amount).await?;
    Ok(Json(ApiResponse::success(entry.into())))
}
