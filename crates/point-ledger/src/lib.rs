//! 积分账本核心库
//!
//! 维护每个用户的积分余额与不可变流水记录，保证并发请求下
//! 同一用户的变更严格串行、不同用户的变更互不阻塞。
//!
//! 本 crate 暴露：
//! - [`PointService`]: 编排层，提供余额查询、流水查询、充值、使用四个操作。
//! - [`LedgerStore`]: 用户余额与流水的内存存储。
//! - [`UserLockRegistry`]: 用户级互斥门注册表。

pub mod config;
pub mod error;
pub mod lock;
pub mod model;
pub mod service;
pub mod store;

pub use config::LedgerConfig;
pub use error::{LedgerError, Result};
pub use lock::UserLockRegistry;
pub use model::{PointEntry, PointHistory, TransactionKind};
pub use service::PointService;
pub use store::LedgerStore;
