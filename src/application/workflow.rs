//! Guided link-creation workflow.
//!
//! An explicit state machine, independent of any rendering concern: the UI
//! drives it with setters and `advance`/`back`/`cancel`, and reads the
//! current step, draft, and loaded form list back out.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::{FormService, LinkService};
use crate::domain::entities::{Customization, Form, Link, NewLink};
use crate::domain::repositories::{FormRepository, LinkRepository, TrafficEventRepository};
use crate::error::AppError;

/// The three steps of the guided process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStep {
    /// Enter the destination URL.
    Url,
    /// Pick the lead-capture form.
    SelectForm,
    /// Customize the landing page and submit.
    Customize,
}

/// Outcome of a successful [`LinkCreator::advance`] call.
#[derive(Debug)]
pub enum WorkflowAdvance {
    /// Moved to the next step.
    Moved(WorkflowStep),
    /// The final step submitted; the workflow has reset to [`WorkflowStep::Url`].
    Submitted(Link),
}

/// In-progress creation payload collected across the steps.
#[derive(Debug, Clone)]
pub struct LinkDraft {
    pub original_url: String,
    pub form_id: Option<i64>,
    pub customization: Customization,
}

impl Default for LinkDraft {
    fn default() -> Self {
        Self {
            original_url: String::new(),
            form_id: None,
            customization: Customization::default(),
        }
    }
}

/// The link-creation state machine.
///
/// Guard failures and store failures both leave the current step unchanged,
/// so every transition is retryable. `cancel` discards all in-progress data.
pub struct LinkCreator<L, F, E>
where
    L: LinkRepository,
    F: FormRepository,
    E: TrafficEventRepository,
{
    link_service: Arc<LinkService<L, E>>,
    form_service: Arc<FormService<F>>,
    step: WorkflowStep,
    draft: LinkDraft,
    available_forms: Vec<Form>,
}

impl<L, F, E> LinkCreator<L, F, E>
where
    L: LinkRepository,
    F: FormRepository,
    E: TrafficEventRepository,
{
    pub fn new(link_service: Arc<LinkService<L, E>>, form_service: Arc<FormService<F>>) -> Self {
        Self {
            link_service,
            form_service,
            step: WorkflowStep::Url,
            draft: LinkDraft::default(),
            available_forms: Vec::new(),
        }
    }

    pub fn step(&self) -> WorkflowStep {
        self.step
    }

    pub fn draft(&self) -> &LinkDraft {
        &self.draft
    }

    /// Forms loaded on entry to [`WorkflowStep::SelectForm`].
    pub fn available_forms(&self) -> &[Form] {
        &self.available_forms
    }

    pub fn set_original_url(&mut self, url: impl Into<String>) {
        self.draft.original_url = url.into();
    }

    pub fn select_form(&mut self, form_id: i64) {
        self.draft.form_id = Some(form_id);
    }

    pub fn customization_mut(&mut self) -> &mut Customization {
        &mut self.draft.customization
    }

    /// Attempts the forward transition for the current step.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when a step guard fails (empty URL,
    /// no form selected), and propagates store errors from form loading or
    /// link creation. The step is unchanged on any error.
    pub async fn advance(&mut self) -> Result<WorkflowAdvance, AppError> {
        match self.step {
            WorkflowStep::Url => {
                if self.draft.original_url.trim().is_empty() {
                    return Err(AppError::validation("Please enter a URL", json!({})));
                }

                self.available_forms = self.form_service.get_all().await?;
                self.step = WorkflowStep::SelectForm;
                Ok(WorkflowAdvance::Moved(self.step))
            }
            WorkflowStep::SelectForm => {
                if self.draft.form_id.is_none() {
                    return Err(AppError::validation("Please select a form", json!({})));
                }

                self.step = WorkflowStep::Customize;
                Ok(WorkflowAdvance::Moved(self.step))
            }
            WorkflowStep::Customize => {
                let form_id = self.draft.form_id.ok_or_else(|| {
                    AppError::validation("Please select a form", json!({}))
                })?;

                let new_link = NewLink {
                    original_url: self.draft.original_url.clone(),
                    form_id,
                    customization: self.draft.customization.clone(),
                    status: None,
                };

                let link = self.link_service.create(new_link).await?;

                tracing::info!(id = link.id, "link creation workflow completed");

                self.reset();
                Ok(WorkflowAdvance::Submitted(link))
            }
        }
    }

    /// Steps back to the previous step; no guard, no side effects. A no-op
    /// at the first step.
    pub fn back(&mut self) {
        self.step = match self.step {
            WorkflowStep::Url | WorkflowStep::SelectForm => WorkflowStep::Url,
            WorkflowStep::Customize => WorkflowStep::SelectForm,
        };
    }

    /// Abandons the workflow, discarding all in-progress data.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.step = WorkflowStep::Url;
        self.draft = LinkDraft::default();
        self.available_forms.clear();
    }
}
