//! 用户级互斥门
//!
//! 为每个用户维护一把独立的异步互斥锁：同一用户的变更严格串行，
//! 不同用户的变更互不阻塞。余额变更是读-改-写流程，没有用户级串行化时
//! 两个并发的使用请求可能读到同一份旧余额并同时成功，导致余额透支。
//! 锁在用户首次变更时按需创建，随账本进程存活。

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// 用户锁注册表
///
/// [`acquire`](Self::acquire) 返回 RAII 守卫，任何退出路径
/// （正常返回、校验失败、任务被取消）都会在守卫析构时释放互斥门，
/// 不会出现无人持有却永久锁死的用户。等待获取期间被取消的任务
/// 既不持有互斥门，也没有做过任何变更。
#[derive(Debug, Default)]
pub struct UserLockRegistry {
    gates: DashMap<u64, Arc<Mutex<()>>>,
}

impl UserLockRegistry {
    /// 创建空的锁注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取指定用户的互斥门，若已被其他操作持有则等待
    ///
    /// 不同用户的互斥门相互独立，获取一把不会阻塞在另一把上。
    pub async fn acquire(&self, user_id: u64) -> OwnedMutexGuard<()> {
        let gate = self.gates.entry(user_id).or_default().clone();
        gate.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_same_user_is_exclusive() {
        let registry = UserLockRegistry::new();

        let guard = registry.acquire(1).await;

        // 同一用户的第二次获取必须等待
        let blocked = timeout(Duration::from_millis(50), registry.acquire(1)).await;
        assert!(blocked.is_err());

        drop(guard);

        // 释放后立即可获取
        let reacquired = timeout(Duration::from_millis(50), registry.acquire(1)).await;
        assert!(reacquired.is_ok());
    }

    #[tokio::test]
    async fn test_distinct_users_do_not_contend() {
        let registry = UserLockRegistry::new();

        let _guard = registry.acquire(1).await;

        let other = timeout(Duration::from_millis(50), registry.acquire(2)).await;
        assert!(other.is_ok());
    }

    #[tokio::test]
    async fn test_cancelled_waiter_does_not_hold_gate() {
        let registry = Arc::new(UserLockRegistry::new());

        let guard = registry.acquire(1).await;

        // 等待中的任务被取消（超时即 future 被 drop）
        let _ = timeout(Duration::from_millis(20), registry.acquire(1)).await;

        drop(guard);

        // 被取消的等待者没有留下任何持有状态
        let reacquired = timeout(Duration::from_millis(50), registry.acquire(1)).await;
        assert!(reacquired.is_ok());
    }
}
