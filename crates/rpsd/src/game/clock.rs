//! Schedule-once delays for the reveal choreography.

use std::time::Duration;

/// Suspends the caller for a fixed duration.
#[async_trait::async_trait]
pub trait Clock: Send + Sync {
    /// Resolves once `duration` has elapsed.
    async fn after(&self, duration: Duration);
}

/// Clock backed by the tokio timer.
///
/// Under a paused runtime (`tokio::time::pause`) delays resolve as soon as
/// every task is idle.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait::async_trait]
impl Clock for TokioClock {
    async fn after(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
