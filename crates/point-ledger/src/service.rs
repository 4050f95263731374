//! 积分服务
//!
//! 账本核心的编排层，对外暴露余额查询、流水查询、充值、使用四个操作。
//! 变更操作先在锁外完成数额校验，再获取该用户的互斥门，
//! 在临界区内完成 读余额 -> 校验 -> 写新快照 -> 追加流水，
//! 守卫析构即释放互斥门，任何错误路径都不会留下部分变更。

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};
use crate::lock::UserLockRegistry;
use crate::model::{PointEntry, PointHistory, TransactionKind, now_millis};
use crate::store::LedgerStore;

/// 积分服务
///
/// 克隆只复制内部 Arc，可在多个请求处理任务之间共享。
#[derive(Clone)]
pub struct PointService {
    store: LedgerStore,
    locks: Arc<UserLockRegistry>,
    config: LedgerConfig,
}

impl Default for PointService {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}

impl PointService {
    /// 创建积分服务，持有独立的账本存储与锁注册表
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            store: LedgerStore::new(),
            locks: Arc::new(UserLockRegistry::new()),
            config,
        }
    }

    /// 查询用户当前积分
    ///
    /// 无锁快照读：与在途变更并发时可能读到变更前或变更后的值，
    /// 但快照整体替换保证不会读到写了一半的余额。
    pub fn get_balance(&self, user_id: u64) -> PointEntry {
        self.store.read_balance(user_id)
    }

    /// 查询用户积分流水，按提交顺序返回
    pub fn get_history(&self, user_id: u64) -> Vec<PointHistory> {
        self.store.read_history(user_id)
    }

    /// 充值积分
    ///
    /// `amount` 必须为正；充值后余额超过配置上限时返回 `Overflow`，
    /// 错误路径不改动余额也不追加流水。
    #[instrument(skip(self))]
    pub async fn charge(&self, user_id: u64, amount: i64) -> Result<PointEntry> {
        Self::validate_amount(amount)?;

        let _gate = self.locks.acquire(user_id).await;

        let current = self.store.read_balance(user_id);
        let new_balance = current
            .balance
            .checked_add(amount)
            .filter(|b| *b <= self.config.max_balance)
            .ok_or(LedgerError::Overflow {
                balance: current.balance,
                amount,
                max_balance: self.config.max_balance,
            })?;

        let entry = self.commit(current, new_balance, TransactionKind::Charge, amount);
        debug!(balance = entry.balance, "point charged");
        Ok(entry)
    }

    /// 使用积分
    ///
    /// `amount` 必须为正；余额不足时返回 `InsufficientBalance`，
    /// 错误路径不改动余额也不追加流水。
    #[instrument(skip(self))]
    pub async fn use_points(&self, user_id: u64, amount: i64) -> Result<PointEntry> {
        Self::validate_amount(amount)?;

        let _gate = self.locks.acquire(user_id).await;

        let current = self.store.read_balance(user_id);
        if current.balance < amount {
            return Err(LedgerError::InsufficientBalance {
                required: amount,
                actual: current.balance,
            });
        }

        let entry = self.commit(current, current.balance - amount, TransactionKind::Use, amount);
        debug!(balance = entry.balance, "point used");
        Ok(entry)
    }

    /// 数额校验，在获取任何锁之前执行
    fn validate_amount(amount: i64) -> Result<()> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount { amount });
        }
        Ok(())
    }

    /// 在持有用户互斥门的前提下提交一次变更：写入新快照并追加流水
    ///
    /// 提交时间戳取当前时间与上一快照时间戳的较大值，
    /// 保证同一用户的流水时间戳单调不减（系统时钟回拨时以流水序号定序）。
    fn commit(
        &self,
        current: PointEntry,
        new_balance: i64,
        kind: TransactionKind,
        amount: i64,
    ) -> PointEntry {
        let timestamp = now_millis().max(current.updated_at_millis);
        let entry = PointEntry {
            user_id: current.user_id,
            balance: new_balance,
            updated_at_millis: timestamp,
        };
        self.store.write_balance(entry);
        self.store.append_history(entry.user_id, kind, amount, timestamp);
        entry
    }
}
