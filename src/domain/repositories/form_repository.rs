//! Repository trait for lead-capture forms.

use crate::domain::entities::{Form, FormPatch, NewForm};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for forms.
///
/// Forms live independently of links; deleting a form does not touch links
/// that reference it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormRepository: Send + Sync {
    /// Returns every form, newest first.
    async fn get_all(&self) -> Result<Vec<Form>, AppError>;

    /// Fetches a form by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    async fn get_by_id(&self, id: i64) -> Result<Form, AppError>;

    /// Persists a new form with a store-allocated id and timestamps.
    async fn create(&self, new_form: NewForm) -> Result<Form, AppError>;

    /// Partially updates a form; `None` patch fields are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    async fn update(&self, id: i64, patch: FormPatch) -> Result<Form, AppError>;

    /// Removes a form by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
