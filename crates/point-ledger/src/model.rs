//! 积分领域模型
//!
//! 定义用户积分快照与积分流水记录。两者都是不可变快照：
//! 每次变更生成新的 [`PointEntry`] 整体替换存储中的旧值，
//! [`PointHistory`] 一经提交不再修改、不会删除。

use serde::{Deserialize, Serialize};

/// 当前毫秒级时间戳
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// 用户积分快照
///
/// `balance` 恒为非负。每次成功的充值/使用都会生成一个新的快照
/// 整体替换旧值，读取方不会观察到写了一半的余额。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointEntry {
    /// 用户 ID
    pub user_id: u64,
    /// 当前积分余额，恒 >= 0
    pub balance: i64,
    /// 最近一次变更的提交时间（毫秒）
    pub updated_at_millis: i64,
}

impl PointEntry {
    /// 未见过的用户首次被引用时的零余额快照
    pub fn empty(user_id: u64) -> Self {
        Self {
            user_id,
            balance: 0,
            updated_at_millis: now_millis(),
        }
    }
}

/// 积分变更类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// 充值
    Charge,
    /// 使用
    Use,
}

/// 积分流水记录
///
/// 记录一次成功的充值/使用事件。`amount` 是本次变更的数额（恒为正），
/// 不是变更后的余额。同一用户的流水按提交顺序存储，
/// 时间戳相同时以 `id` 定序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointHistory {
    /// 流水序号，进程内全局递增
    pub id: i64,
    /// 事件归属的用户
    pub user_id: u64,
    /// 变更类型
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// 本次变更的数额，恒为正
    pub amount: i64,
    /// 事件提交时间（毫秒）
    pub timestamp_millis: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_entry() {
        let entry = PointEntry::empty(42);
        assert_eq!(entry.user_id, 42);
        assert_eq!(entry.balance, 0);
        assert!(entry.updated_at_millis > 0);
    }

    #[test]
    fn test_transaction_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Charge).unwrap(),
            "\"CHARGE\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionKind::Use).unwrap(),
            "\"USE\""
        );
    }

    #[test]
    fn test_history_serialization_field_names() {
        let record = PointHistory {
            id: 1,
            user_id: 42,
            kind: TransactionKind::Charge,
            amount: 100,
            timestamp_millis: 1_700_000_000_000,
        };
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["userId"], 42);
        assert_eq!(json["type"], "CHARGE");
        assert_eq!(json["amount"], 100);
        assert_eq!(json["timestampMillis"], 1_700_000_000_000i64);
    }
}
