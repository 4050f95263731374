//! 账本配置

use serde::Deserialize;

/// 账本配置
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// 余额上限，充值导致余额超过该值时返回 `Overflow`
    pub max_balance: i64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_balance: i64::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_balance() {
        let config = LedgerConfig::default();
        assert_eq!(config.max_balance, i64::MAX);
    }
}
