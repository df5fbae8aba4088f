//! Lead-capture form service.

use std::sync::Arc;

use validator::Validate;

use crate::domain::entities::{Form, FormPatch, NewForm};
use crate::domain::repositories::FormRepository;
use crate::error::AppError;

/// CRUD service for forms.
pub struct FormService<F: FormRepository> {
    repository: Arc<F>,
}

impl<F: FormRepository> FormService<F> {
    pub fn new(repository: Arc<F>) -> Self {
        Self { repository }
    }

    /// Returns every form, newest first.
    pub async fn get_all(&self) -> Result<Vec<Form>, AppError> {
        self.repository.get_all().await
    }

    /// Fetches a form by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    pub async fn get_by_id(&self, id: i64) -> Result<Form, AppError> {
        self.repository.get_by_id(id).await
    }

    /// Creates a form after validating the payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty name or a malformed
    /// theme color.
    pub async fn create(&self, new_form: NewForm) -> Result<Form, AppError> {
        new_form.validate().map_err(|e| {
            AppError::validation(
                "Invalid form payload",
                serde_json::to_value(&e).unwrap_or(serde_json::Value::Null),
            )
        })?;

        let form = self.repository.create(new_form).await?;

        tracing::info!(id = form.id, name = %form.name, "form created");

        Ok(form)
    }

    /// Partially updates a form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    pub async fn update(&self, id: i64, patch: FormPatch) -> Result<Form, AppError> {
        self.repository.update(id, patch).await
    }

    /// Deletes a form. Links referencing it are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;

        tracing::info!(id, "form deleted");

        Ok(())
    }
}
