//! Repository trait for form submissions.

use crate::domain::entities::{NewSubmission, Submission};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for submissions.
///
/// Submissions are append-only: there is no update operation, only creation
/// and deletion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Returns every submission, newest first.
    async fn get_all(&self) -> Result<Vec<Submission>, AppError>;

    /// Fetches a submission by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    async fn get_by_id(&self, id: i64) -> Result<Submission, AppError>;

    /// Returns all submissions recorded against a link, newest first.
    ///
    /// An unknown `link_id` yields an empty list, not an error.
    async fn get_by_link_id(&self, link_id: i64) -> Result<Vec<Submission>, AppError>;

    /// Persists a new submission with a store-allocated id and timestamp.
    async fn create(&self, new_submission: NewSubmission) -> Result<Submission, AppError>;

    /// Removes a submission by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
