//! Application services orchestrating the repositories.

mod analytics_service;
mod form_service;
mod link_service;
mod submission_service;

pub use analytics_service::{
    AnalyticsOverview, AnalyticsService, ChartBundle, LocationShare, OverviewTotals, SeriesPoint,
    top_locations,
};
pub use form_service::FormService;
pub use link_service::LinkService;
pub use submission_service::SubmissionService;
