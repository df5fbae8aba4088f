//! In-memory link store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, LinkPatch, LinkStatus, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::latency::LatencyPolicy;
use crate::infrastructure::persistence::collection::{Collection, Record};

impl Record for Link {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Fixture-seeded in-memory implementation of [`LinkRepository`].
pub struct MemoryLinkRepository {
    collection: RwLock<Collection<Link>>,
    latency: Arc<dyn LatencyPolicy>,
}

impl MemoryLinkRepository {
    pub fn new(latency: Arc<dyn LatencyPolicy>) -> Self {
        Self {
            collection: RwLock::new(Collection::empty()),
            latency,
        }
    }

    pub fn seeded(seed: Vec<Link>, latency: Arc<dyn LatencyPolicy>) -> Self {
        Self {
            collection: RwLock::new(Collection::seeded(seed)),
            latency,
        }
    }

    fn missing(id: i64) -> AppError {
        AppError::not_found("Link not found", json!({ "id": id }))
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn get_all(&self) -> Result<Vec<Link>, AppError> {
        self.latency.pause().await;

        Ok(self.collection.read().await.all())
    }

    async fn get_by_id(&self, id: i64) -> Result<Link, AppError> {
        self.latency.pause().await;

        self.collection
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| Self::missing(id))
    }

    async fn find_by_gated_url(&self, gated_url: &str) -> Result<Option<Link>, AppError> {
        self.latency.pause().await;

        Ok(self
            .collection
            .read()
            .await
            .iter()
            .find(|link| link.gated_url == gated_url)
            .cloned())
    }

    async fn create(&self, new_link: NewLink, gated_url: String) -> Result<Link, AppError> {
        self.latency.pause().await;

        let mut collection = self.collection.write().await;
        let now = Utc::now();
        let link = Link {
            id: collection.allocate_id(),
            original_url: new_link.original_url,
            form_id: new_link.form_id,
            customization: new_link.customization,
            gated_url,
            status: new_link.status.unwrap_or(LinkStatus::Active),
            clicks: 0,
            submissions: 0,
            created_at: now,
            updated_at: now,
        };

        tracing::debug!(id = link.id, gated_url = %link.gated_url, "link created");

        collection.insert_front(link.clone());
        Ok(link)
    }

    async fn update(&self, id: i64, patch: LinkPatch) -> Result<Link, AppError> {
        self.latency.pause().await;

        let mut collection = self.collection.write().await;
        let link = collection.get_mut(id).ok_or_else(|| Self::missing(id))?;

        if let Some(original_url) = patch.original_url {
            link.original_url = original_url;
        }
        if let Some(form_id) = patch.form_id {
            link.form_id = form_id;
        }
        if let Some(customization) = patch.customization {
            link.customization = customization;
        }
        if let Some(status) = patch.status {
            link.status = status;
        }
        link.updated_at = Utc::now();

        Ok(link.clone())
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

    async fn record_click(&self, id: i64) -> Result<Link, AppError> {
        self.latency.pause().await;

        let mut collection = self.collection.write().await;
        let link = collection.get_mut(id).ok_or_else(|| Self::missing(id))?;

        link.clicks += 1;
        link.updated_at = Utc::now();

        Ok(link.clone())
    }

    async fn record_submission(&self, id: i64) -> Result<Link, AppError> {
        self.latency.pause().await;

        let mut collection = self.collection.write().await;
        let link = collection.get_mut(id).ok_or_else(|| Self::missing(id))?;

        link.submissions += 1;
        link.updated_at = Utc::now();

        Ok(link.clone())
    }
}
