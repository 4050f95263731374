//! 路由配置

use axum::{
    Router,
    routing::{get, patch},
};

use crate::{handlers, state::AppState};

/// 构建积分相关的路由
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/point/{id}", get(handlers::get_point))
        .route("/point/{id}/histories", get(handlers::get_histories))
        .route("/point/{id}/charge", patch(handlers::charge))
        .route("/point/{id}/use", patch(handlers::use_points))
}
