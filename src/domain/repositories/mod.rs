//! Repository traits abstracting entity storage from the service layer.

mod event_repository;
mod form_repository;
mod link_repository;
mod submission_repository;

pub use event_repository::{LinkScope, TimeRange, TrafficEventRepository};
pub use form_repository::FormRepository;
pub use link_repository::LinkRepository;
pub use submission_repository::SubmissionRepository;

#[cfg(test)]
pub use event_repository::MockTrafficEventRepository;
#[cfg(test)]
pub use form_repository::MockFormRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use submission_repository::MockSubmissionRepository;
