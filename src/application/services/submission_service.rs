//! Form submission service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{NewSubmission, Submission};
use crate::domain::repositories::{LinkRepository, SubmissionRepository, TrafficEventRepository};
use crate::domain::traffic_event::TrafficEvent;
use crate::error::AppError;

/// Service recording and retrieving form submissions.
///
/// A recorded submission also bumps the owning link's submission counter and
/// appends a traffic event, keeping analytics consistent with the stores.
pub struct SubmissionService<S, L, E>
where
    S: SubmissionRepository,
    L: LinkRepository,
    E: TrafficEventRepository,
{
    submission_repository: Arc<S>,
    link_repository: Arc<L>,
    event_repository: Arc<E>,
}

impl<S, L, E> SubmissionService<S, L, E>
where
    S: SubmissionRepository,
    L: LinkRepository,
    E: TrafficEventRepository,
{
    pub fn new(
        submission_repository: Arc<S>,
        link_repository: Arc<L>,
        event_repository: Arc<E>,
    ) -> Self {
        Self {
            submission_repository,
            link_repository,
            event_repository,
        }
    }

    /// Returns every submission, newest first.
    pub async fn get_all(&self) -> Result<Vec<Submission>, AppError> {
        self.submission_repository.get_all().await
    }

    /// Fetches a submission by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    pub async fn get_by_id(&self, id: i64) -> Result<Submission, AppError> {
        self.submission_repository.get_by_id(id).await
    }

    /// Returns all submissions recorded against a link, newest first.
    pub async fn get_by_link_id(&self, link_id: i64) -> Result<Vec<Submission>, AppError> {
        self.submission_repository.get_by_link_id(link_id).await
    }

    /// Records a submission against an existing link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the referenced link does not
    /// exist.
    pub async fn create(&self, new_submission: NewSubmission) -> Result<Submission, AppError> {
        let link_id = new_submission.link_id;

        if self.link_repository.get_by_id(link_id).await.is_err() {
            return Err(AppError::validation(
                "Cannot record a submission for an unknown link",
                json!({ "link_id": link_id }),
            ));
        }

        let submission = self.submission_repository.create(new_submission).await?;

        self.link_repository.record_submission(link_id).await?;
        self.event_repository
            .append(TrafficEvent::submission(link_id, Utc::now()))
            .await?;

        tracing::info!(id = submission.id, link_id, "submission recorded");

        Ok(submission)
    }

    /// Deletes a submission. Counters are lifetime totals and are not
    /// decremented.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.submission_repository.delete(id).await
    }
}
