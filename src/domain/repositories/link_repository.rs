//! Repository trait for gated link storage.

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for gated links.
///
/// All mutation of the underlying collection goes through these operations;
/// no other component touches it directly.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - fixture-seeded in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns every link, newest first.
    async fn get_all(&self) -> Result<Vec<Link>, AppError>;

    /// Fetches a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    async fn get_by_id(&self, id: i64) -> Result<Link, AppError>;

    /// Looks up a link by its shareable gated URL.
    ///
    /// Used to guarantee gated-URL uniqueness at creation time.
    async fn find_by_gated_url(&self, gated_url: &str) -> Result<Option<Link>, AppError>;

    /// Persists a new link and returns it with server-assigned fields filled.
    ///
    /// The store allocates the id, sets both timestamps, and zeroes the
    /// traffic counters. `gated_url` is synthesized by the caller.
    async fn create(&self, new_link: NewLink, gated_url: String) -> Result<Link, AppError>;

    /// Partially updates a link; `None` patch fields are left unchanged.
    ///
    /// Refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    async fn update(&self, id: i64, patch: LinkPatch) -> Result<Link, AppError>;

    /// Removes a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Increments the click counter and returns the updated link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    async fn record_click(&self, id: i64) -> Result<Link, AppError>;

    /// Increments the submission counter and returns the updated link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    async fn record_submission(&self, id: i64) -> Result<Link, AppError>;
}
