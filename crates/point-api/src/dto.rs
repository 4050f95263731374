//! REST API 响应 DTO 定义

use point_ledger::{PointEntry, PointHistory, TransactionKind};
use serde::Serialize;

/// API 统一响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: Some(data),
        }
    }
}

/// 用户积分响应 DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPointDto {
    pub id: u64,
    pub point: i64,
    pub update_millis: i64,
}

impl From<PointEntry> for UserPointDto {
    fn from(entry: PointEntry) -> Self {
        Self {
            id: entry.user_id,
            point: entry.balance,
            update_millis: entry.updated_at_millis,
        }
    }
}

/// 积分流水响应 DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointHistoryDto {
    pub id: i64,
    pub user_id: u64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: i64,
    pub time_millis: i64,
}

impl From<PointHistory> for PointHistoryDto {
    fn from(record: PointHistory) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            kind: record.kind,
            amount: record.amount,
            time_millis: record.timestamp_millis,
        }
    }
}
