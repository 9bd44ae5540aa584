use std::time::Duration;

use async_trait::async_trait;

/// Wall-clock time and delays, injectable so tests can run many cycles instantly.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current unix time in seconds.
    fn now(&self) -> i64;

    async fn sleep(&self, duration: Duration);
}

/// Real time backed by chrono and the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
