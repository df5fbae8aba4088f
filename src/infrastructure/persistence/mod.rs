//! In-memory entity stores implementing the repository traits.

mod collection;
mod memory_event_repository;
mod memory_form_repository;
mod memory_link_repository;
mod memory_submission_repository;

pub use memory_event_repository::MemoryTrafficEventRepository;
pub use memory_form_repository::MemoryFormRepository;
pub use memory_link_repository::MemoryLinkRepository;
pub use memory_submission_repository::MemorySubmissionRepository;
