//! 账本错误类型
//!
//! 三类错误都是同步检出的校验失败：数额校验在获取任何锁之前完成，
//! 余额不足与余额溢出在临界区内、写入任何状态之前检出。
//! 校验失败不做内部重试，错误路径上不追加流水也不改动余额。

use thiserror::Error;

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, LedgerError>;

/// 账本核心错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// 充值/使用的数额必须为正，进入临界区之前即被拒绝
    #[error("无效的数额: {amount}，必须为正整数")]
    InvalidAmount { amount: i64 },

    /// 使用的积分超过当前余额，拒绝时不产生任何变更
    #[error("积分余额不足: 需要 {required}, 实际 {actual}")]
    InsufficientBalance { required: i64, actual: i64 },

    /// 充值后余额将超出上限，拒绝时不产生任何变更
    #[error("积分余额溢出: 当前 {balance} 充值 {amount} 超过上限 {max_balance}")]
    Overflow {
        balance: i64,
        amount: i64,
        max_balance: i64,
    },
}

impl LedgerError {
    /// 获取错误码（对外 API 响应使用）
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            Self::Overflow { .. } => "OVERFLOW",
        }
    }
}
