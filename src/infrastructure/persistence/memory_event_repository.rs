//! In-memory traffic event log.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::repositories::{LinkScope, TrafficEventRepository};
use crate::domain::traffic_event::TrafficEvent;
use crate::error::AppError;
use crate::infrastructure::latency::LatencyPolicy;

/// Append-only in-memory implementation of [`TrafficEventRepository`].
pub struct MemoryTrafficEventRepository {
    events: RwLock<Vec<TrafficEvent>>,
    latency: Arc<dyn LatencyPolicy>,
}

impl MemoryTrafficEventRepository {
    pub fn new(latency: Arc<dyn LatencyPolicy>) -> Self {
        Self {
            events: RwLock::new(Vec::new()),
            latency,
        }
    }

    pub fn seeded(seed: Vec<TrafficEvent>, latency: Arc<dyn LatencyPolicy>) -> Self {
        Self {
            events: RwLock::new(seed),
            latency,
        }
    }
}

#[async_trait]
impl TrafficEventRepository for MemoryTrafficEventRepository {
    async fn append(&self, event: TrafficEvent) -> Result<(), AppError> {
        self.latency.pause().await;

        self.events.write().await.push(event);
        Ok(())
    }

    async fn events_since(
        &self,
        from: DateTime<Utc>,
        scope: LinkScope,
    ) -> Result<Vec<TrafficEvent>, AppError> {
        self.latency.pause().await;

        let mut matched: Vec<TrafficEvent> = self
            .events
            .read()
            .await
            .iter()
            .filter(|event| event.occurred_at >= from && scope.includes(event.link_id))
            .cloned()
            .collect();

        matched.sort_by_key(|event| event.occurred_at);
        Ok(matched)
    }
}
