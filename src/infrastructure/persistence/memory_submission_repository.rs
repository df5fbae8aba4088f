//! In-memory submission store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{NewSubmission, Submission};
use crate::domain::repositories::SubmissionRepository;
use crate::error::AppError;
use crate::infrastructure::latency::LatencyPolicy;
use crate::infrastructure::persistence::collection::{Collection, Record};

impl Record for Submission {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Fixture-seeded in-memory implementation of [`SubmissionRepository`].
pub struct MemorySubmissionRepository {
    collection: RwLock<Collection<Submission>>,
    latency: Arc<dyn LatencyPolicy>,
}

impl MemorySubmissionRepository {
    pub fn new(latency: Arc<dyn LatencyPolicy>) -> Self {
        Self {
            collection: RwLock::new(Collection::empty()),
            latency,
        }
    }

    pub fn seeded(seed: Vec<Submission>, latency: Arc<dyn LatencyPolicy>) -> Self {
        Self {
            collection: RwLock::new(Collection::seeded(seed)),
            latency,
        }
    }

    fn missing(id: i64) -> AppError {
        AppError::not_found("Submission not found", json!({ "id": id }))
    }
}

#[async_trait]
impl SubmissionRepository for MemorySubmissionRepository {
    async fn get_all(&self) -> Result<Vec<Submission>, AppError> {
        self.latency.pause().await;

        Ok(self.collection.read().await.all())
    }

    async fn get_by_id(&self, id: i64) -> Result<Submission, AppError> {
        self.latency.pause().await;

        self.collection
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| Self::missing(id))
    }

    async fn get_by_link_id(&self, link_id: i64) -> Result<Vec<Submission>, AppError> {
        self.latency.pause().await;

        Ok(self
            .collection
            .read()
            .await
            .iter()
            .filter(|submission| submission.link_id == link_id)
            .cloned()
            .collect())
    }

    async fn create(&self, new_submission: NewSubmission) -> Result<Submission, AppError> {
        self.latency.pause().await;

        let mut collection = self.collection.write().await;
        let submission = Submission {
            id: collection.allocate_id(),
            link_id: new_submission.link_id,
            data: new_submission.data,
            submitted_at: Utc::now(),
        };

        tracing::debug!(
            id = submission.id,
            link_id = submission.link_id,
            "submission recorded"
        );

        collection.insert_front(submission.clone());
        Ok(submission)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.latency.pause().await;

        self.collection
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Self::missing(id))
    }
}
