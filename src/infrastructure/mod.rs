//! Infrastructure layer: in-memory persistence, seed fixtures, and the
//! simulated-latency policy.

pub mod fixtures;
pub mod latency;
pub mod persistence;
