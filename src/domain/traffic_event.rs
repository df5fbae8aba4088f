//! Traffic event model backing the analytics time series.
//!
//! Every click and submission appends one timestamped event. The analytics
//! aggregator rolls these up by day instead of fabricating series data, so
//! chart values and stored counters stay consistent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of traffic recorded against a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficKind {
    Click,
    Submission,
}

/// One click or submission against a gated link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficEvent {
    pub link_id: i64,
    pub kind: TrafficKind,
    pub occurred_at: DateTime<Utc>,
}

impl TrafficEvent {
    pub fn click(link_id: i64, occurred_at: DateTime<Utc>) -> Self {
        Self {
            link_id,
            kind: TrafficKind::Click,
            occurred_at,
        }
    }

    pub fn submission(link_id: i64, occurred_at: DateTime<Utc>) -> Self {
        Self {
            link_id,
            kind: TrafficKind::Submission,
            occurred_at,
        }
    }
}
