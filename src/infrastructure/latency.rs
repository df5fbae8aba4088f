//! Injectable latency simulation for store operations.
//!
//! The stores emulate network calls by awaiting a policy before touching
//! their collection. Tests and the default configuration use [`NoLatency`];
//! setting `SIMULATED_LATENCY_MS` selects [`FixedLatency`].

use async_trait::async_trait;
use std::time::Duration;

/// Strategy awaited at the start of every store operation.
#[async_trait]
pub trait LatencyPolicy: Send + Sync {
    async fn pause(&self);
}

/// No artificial delay. The default.
pub struct NoLatency;

#[async_trait]
impl LatencyPolicy for NoLatency {
    async fn pause(&self) {}
}

/// Fixed artificial delay per operation.
pub struct FixedLatency {
    delay: Duration,
}

impl FixedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

#[async_trait]
impl LatencyPolicy for FixedLatency {
    async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }
}
