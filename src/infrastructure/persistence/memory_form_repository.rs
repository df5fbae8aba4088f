//! In-memory form store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{Form, FormPatch, NewForm};
use crate::domain::repositories::FormRepository;
use crate::error::AppError;
use crate::infrastructure::latency::LatencyPolicy;
use crate::infrastructure::persistence::collection::{Collection, Record};

impl Record for Form {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Fixture-seeded in-memory implementation of [`FormRepository`].
pub struct MemoryFormRepository {
    collection: RwLock<Collection<Form>>,
    latency: Arc<dyn LatencyPolicy>,
}

impl MemoryFormRepository {
    pub fn new(latency: Arc<dyn LatencyPolicy>) -> Self {
        Self {
            collection: RwLock::new(Collection::empty()),
            latency,
        }
    }

    pub fn seeded(seed: Vec<Form>, latency: Arc<dyn LatencyPolicy>) -> Self {
        Self {
            collection: RwLock::new(Collection::seeded(seed)),
            latency,
        }
    }

    fn missing(id: i64) -> AppError {
        AppError::not_found("Form not found", json!({ "id": id }))
    }
}

#[async_trait]
impl FormRepository for MemoryFormRepository {
    async fn get_all(&self) -> Result<Vec<Form>, AppError> {
        self.latency.pause().await;

        Ok(self.collection.read().await.all())
    }

    async fn get_by_id(&self, id: i64) -> Result<Form, AppError> {
        self.latency.pause().await;

        self.collection
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| Self::missing(id))
    }

    async fn create(&self, new_form: NewForm) -> Result<Form, AppError> {
        self.latency.pause().await;

        let mut collection = self.collection.write().await;
        let now = Utc::now();
        let form = Form {
            id: collection.allocate_id(),
            name: new_form.name,
            description: new_form.description,
            fields: new_form.fields,
            theme: new_form.theme,
            created_at: now,
            updated_at: now,
        };

        tracing::debug!(id = form.id, name = %form.name, "form created");

        collection.insert_front(form.clone());
        Ok(form)
    }

    async fn update(&self, id: i64, patch: FormPatch) -> Result<Form, AppError> {
        self.latency.pause().await;

        let mut collection = self.collection.write().await;
        let form = collection.get_mut(id).ok_or_else(|| Self::missing(id))?;

        if let Some(name) = patch.name {
            form.name = name;
        }
        if let Some(description) = patch.description {
            form.description = description;
        }
        if let Some(fields) = patch.fields {
            form.fields = fields;
        }
        if let Some(theme) = patch.theme {
            form.theme = theme;
        }
        form.updated_at = Utc::now();

        Ok(form.clone())
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
