//! Domain layer: entities, traffic events, and repository traits.

pub mod entities;
pub mod repositories;
pub mod traffic_event;
