//! 账本存储
//!
//! 基于 DashMap 的内存存储，保存每个用户的当前积分快照与完整流水。
//! 本模块只负责状态，不做任何校验或并发控制：
//! 写接口只会在调用方持有该用户的互斥门时被调用，
//! 读接口无锁，与在途变更并发时最多观察到变更前或变更后的完整快照。

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;

use crate::model::{PointEntry, PointHistory, TransactionKind};

/// 账本存储
///
/// 克隆只复制内部 Arc，各克隆共享同一份底层数据。
#[derive(Debug, Default)]
pub struct LedgerStore {
    /// 用户 ID -> 当前积分快照
    balances: Arc<DashMap<u64, PointEntry>>,
    /// 用户 ID -> 按提交顺序排列的流水
    histories: Arc<DashMap<u64, Vec<PointHistory>>>,
    /// 流水序号游标
    cursor: Arc<AtomicI64>,
}

impl Clone for LedgerStore {
    fn clone(&self) -> Self {
        Self {
            balances: Arc::clone(&self.balances),
            histories: Arc::clone(&self.histories),
            cursor: Arc::clone(&self.cursor),
        }
    }
}

impl LedgerStore {
    /// 创建空的账本存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取用户当前积分快照
    ///
    /// 未见过的用户返回零余额快照，但不落库（读取不产生状态，也不产生流水）。
    pub fn read_balance(&self, user_id: u64) -> PointEntry {
        self.balances
            .get(&user_id)
            .map(|entry| *entry)
            .unwrap_or_else(|| PointEntry::empty(user_id))
    }

    /// 整体替换用户的积分快照
    pub fn write_balance(&self, entry: PointEntry) {
        self.balances.insert(entry.user_id, entry);
    }

    /// 追加一条流水
    ///
    /// 分配进程内递增的流水序号，按提交顺序插入到该用户流水的末尾，
    /// 返回完整的流水记录。
    pub fn append_history(
        &self,
        user_id: u64,
        kind: TransactionKind,
        amount: i64,
        timestamp_millis: i64,
    ) -> PointHistory {
        let record = PointHistory {
            id: self.cursor.fetch_add(1, Ordering::Relaxed) + 1,
            user_id,
            kind,
            amount,
            timestamp_millis,
        };
        self.histories.entry(user_id).or_default().push(record);
        record
    }

    /// 按提交顺序返回用户的全部流水
    ///
    /// 返回流水的克隆，不持有锁。
    pub fn read_history(&self, user_id: u64) -> Vec<PointHistory> {
        self.histories
            .get(&user_id)
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}
