//! HTTP 层错误映射
//!
//! 将账本核心的校验失败映射为对应的 HTTP 状态码与统一错误响应体。

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use point_ledger::LedgerError;
use serde_json::json;

/// HTTP 适配层错误
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 账本核心返回的校验失败
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl ApiError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Ledger(LedgerError::InvalidAmount { .. }) => StatusCode::BAD_REQUEST,
            Self::Ledger(LedgerError::InsufficientBalance { .. })
            | Self::Ledger(LedgerError::Overflow { .. }) => StatusCode::CONFLICT,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Ledger(err) => err.code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "success": false,
            "code": self.error_code(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
