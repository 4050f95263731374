//! 积分服务 HTTP 适配层
//!
//! 将 REST 请求反序列化后直接转发给 point-ledger 核心的四个操作，
//! 自身不包含任何业务逻辑：校验、并发控制与状态变更全部由核心完成。

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
