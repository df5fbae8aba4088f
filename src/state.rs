//! Application context wiring repositories and services together.
//!
//! Each context owns isolated store instances, so tests construct their own
//! contexts instead of sharing process-wide state.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, FormService, LinkService, SubmissionService};
use crate::application::workflow::LinkCreator;
use crate::config::Config;
use crate::error::AppError;
use crate::infrastructure::fixtures::seed_data;
use crate::infrastructure::persistence::{
    MemoryFormRepository, MemoryLinkRepository, MemorySubmissionRepository,
    MemoryTrafficEventRepository,
};

type Links = MemoryLinkRepository;
type Forms = MemoryFormRepository;
type Submissions = MemorySubmissionRepository;
type Events = MemoryTrafficEventRepository;

/// Fully wired application context over the in-memory stores.
pub struct AppContext {
    pub link_service: Arc<LinkService<Links, Events>>,
    pub form_service: Arc<FormService<Forms>>,
    pub submission_service: Arc<SubmissionService<Submissions, Links, Events>>,
    pub analytics_service: Arc<AnalyticsService<Links, Events>>,
}

impl AppContext {
    /// Builds a context with every store seeded from the embedded fixtures.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if a fixture document is malformed.
    pub fn seeded(config: &Config) -> Result<Self, AppError> {
        let seed = seed_data()?;
        let latency = config.latency();

        let links = Arc::new(MemoryLinkRepository::seeded(seed.links, latency.clone()));
        let forms = Arc::new(MemoryFormRepository::seeded(seed.forms, latency.clone()));
        let submissions = Arc::new(MemorySubmissionRepository::seeded(
            seed.submissions,
            latency.clone(),
        ));
        let events = Arc::new(MemoryTrafficEventRepository::seeded(seed.events, latency));

        Ok(Self::wire(config, links, forms, submissions, events))
    }

    /// Builds a context with empty stores.
    pub fn empty(config: &Config) -> Self {
        let latency = config.latency();

        let links = Arc::new(MemoryLinkRepository::new(latency.clone()));
        let forms = Arc::new(MemoryFormRepository::new(latency.clone()));
        let submissions = Arc::new(MemorySubmissionRepository::new(latency.clone()));
        let events = Arc::new(MemoryTrafficEventRepository::new(latency));

        Self::wire(config, links, forms, submissions, events)
    }

    /// Starts a fresh link-creation workflow over this context.
    pub fn link_creator(&self) -> LinkCreator<Links, Forms, Events> {
        LinkCreator::new(self.link_service.clone(), self.form_service.clone())
    }

    fn wire(
        config: &Config,
        links: Arc<Links>,
        forms: Arc<Forms>,
        submissions: Arc<Submissions>,
        events: Arc<Events>,
    ) -> Self {
        let link_service = Arc::new(LinkService::new(
            links.clone(),
            events.clone(),
            config.gated_base_url.clone(),
        ));
        let form_service = Arc::new(FormService::new(forms));
        let submission_service = Arc::new(SubmissionService::new(
            submissions,
            links.clone(),
            events.clone(),
        ));
        let analytics_service = Arc::new(AnalyticsService::new(links, events));

        Self {
            link_service,
            form_service,
            submission_service,
            analytics_service,
        }
    }
}
