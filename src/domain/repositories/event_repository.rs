//! Repository trait for the traffic event log, plus the query types shared
//! with the analytics aggregator.

use crate::domain::traffic_event::TrafficEvent;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::str::FromStr;

/// Aggregation window for analytics queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Days7,
    Days30,
    Days90,
}

impl TimeRange {
    /// Number of day buckets in the window.
    pub fn days(self) -> i64 {
        match self {
            Self::Days7 => 7,
            Self::Days30 => 30,
            Self::Days90 => 90,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Days7 => "7d",
            Self::Days30 => "30d",
            Self::Days90 => "90d",
        }
    }
}

impl FromStr for TimeRange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(Self::Days7),
            "30d" => Ok(Self::Days30),
            "90d" => Ok(Self::Days90),
            other => Err(AppError::validation(
                "Time range must be one of 7d, 30d, 90d",
                json!({ "range": other }),
            )),
        }
    }
}

/// Link filter for analytics queries: everything, or one specific link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkScope {
    All,
    Link(i64),
}

impl LinkScope {
    /// Whether a link id falls inside this scope.
    pub fn includes(self, link_id: i64) -> bool {
        match self {
            Self::All => true,
            Self::Link(id) => id == link_id,
        }
    }
}

impl FromStr for LinkScope {
    type Err = AppError;

    /// Parses the sentinel `"all"` or a numeric link id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        s.parse::<i64>().map(Self::Link).map_err(|_| {
            AppError::validation(
                "Link filter must be \"all\" or a link id",
                json!({ "filter": s }),
            )
        })
    }
}

/// Repository interface for the append-only traffic event log.
///
/// Events are the source of truth for time-bucketed analytics series; the
/// per-link counters are lifetime totals derived from the same traffic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrafficEventRepository: Send + Sync {
    /// Appends one event to the log.
    async fn append(&self, event: TrafficEvent) -> Result<(), AppError>;

    /// Returns events at or after `from`, restricted to `scope`, in
    /// chronological order.
    async fn events_since(
        &self,
        from: DateTime<Utc>,
        scope: LinkScope,
    ) -> Result<Vec<TrafficEvent>, AppError>;
}
