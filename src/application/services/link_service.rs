//! Gated link lifecycle service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use validator::Validate;

use crate::domain::entities::{Link, LinkPatch, LinkStatus, NewLink};
use crate::domain::repositories::{LinkRepository, TrafficEventRepository};
use crate::domain::traffic_event::TrafficEvent;
use crate::error::AppError;
use crate::utils::token::generate_token;
use crate::utils::url_normalizer::normalize_original_url;

/// Service managing the gated link lifecycle.
///
/// Validates creation payloads, normalizes destination URLs, synthesizes a
/// unique shareable gated URL, and records click traffic against both the
/// link counters and the traffic event log.
pub struct LinkService<L: LinkRepository, E: TrafficEventRepository> {
    link_repository: Arc<L>,
    event_repository: Arc<E>,
    gated_base_url: String,
}

impl<L: LinkRepository, E: TrafficEventRepository> LinkService<L, E> {
    /// Creates a new link service.
    ///
    /// `gated_base_url` is the prefix of every generated gated URL, e.g.
    /// `https://gatelink.pro/g/`.
    pub fn new(
        link_repository: Arc<L>,
        event_repository: Arc<E>,
        gated_base_url: impl Into<String>,
    ) -> Self {
        Self {
            link_repository,
            event_repository,
            gated_base_url: gated_base_url.into(),
        }
    }

    /// Returns every link, newest first.
    pub async fn get_all(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.get_all().await
    }

    /// Fetches a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    pub async fn get_by_id(&self, id: i64) -> Result<Link, AppError> {
        self.link_repository.get_by_id(id).await
    }

    /// Creates a gated link.
    ///
    /// The destination URL is normalized, the customization colors are
    /// checked, and the gated URL is generated with bounded collision
    /// retries. Counters start at zero and the status defaults to active.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid payload and
    /// [`AppError::Internal`] if a unique gated URL cannot be generated.
    pub async fn create(&self, mut new_link: NewLink) -> Result<Link, AppError> {
        new_link.validate().map_err(|e| {
            AppError::validation(
                "Invalid link payload",
                serde_json::to_value(&e).unwrap_or(serde_json::Value::Null),
            )
        })?;

        new_link.original_url = normalize_original_url(&new_link.original_url)?;

        let gated_url = self.generate_unique_gated_url().await?;
        let link = self.link_repository.create(new_link, gated_url).await?;

        tracing::info!(id = link.id, gated_url = %link.gated_url, "gated link created");

        Ok(link)
    }

    /// Partially updates a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    pub async fn update(&self, id: i64, patch: LinkPatch) -> Result<Link, AppError> {
        self.link_repository.update(id, patch).await
    }

    /// Sets the publication state, used by the status-toggle control.
    pub async fn set_status(&self, id: i64, status: LinkStatus) -> Result<Link, AppError> {
        let link = self
            .link_repository
            .update(id, LinkPatch::status(status))
            .await?;

        tracing::info!(id, status = status.as_str(), "link status changed");

        Ok(link)
    }

    /// Flips a link between active and paused.
    pub async fn toggle_status(&self, id: i64) -> Result<Link, AppError> {
        let link = self.link_repository.get_by_id(id).await?;
        self.set_status(id, link.status.toggled()).await
    }

    /// Deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.link_repository.delete(id).await?;

        tracing::info!(id, "link deleted");

        Ok(())
    }

    /// Records one click: bumps the counter and appends a traffic event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    pub async fn record_click(&self, id: i64) -> Result<Link, AppError> {
        let link = self.link_repository.record_click(id).await?;

        self.event_repository
            .append(TrafficEvent::click(id, Utc::now()))
            .await?;

        Ok(link)
    }

    /// Generates a gated URL not yet held by any link.
    ///
    /// Attempts up to 10 times before failing.
    async fn generate_unique_gated_url(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let candidate = format!("{}{}", self.gated_base_url, generate_token());

            if self
                .link_repository
                .find_by_gated_url(&candidate)
                .await?
                .is_none()
            {
                return Ok(candidate);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique gated URL",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
