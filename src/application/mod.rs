//! Application layer: business services and the link-creation workflow.

pub mod services;
pub mod workflow;
