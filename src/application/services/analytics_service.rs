//! Conversion analytics aggregator.
//!
//! Totals come from the link counters; time series come from a group-by-day
//! rollup of the traffic event log over the requested window. For fixed
//! underlying data the whole overview is deterministic.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::domain::entities::conversion_rate;
use crate::domain::repositories::{LinkRepository, LinkScope, TimeRange, TrafficEventRepository};
use crate::domain::traffic_event::TrafficKind;
use crate::error::AppError;

/// Aggregated totals over the scoped link set.
#[derive(Debug, Clone, Serialize)]
pub struct OverviewTotals {
    pub total_clicks: u64,
    pub total_submissions: u64,
    /// Percentage, 0 when there are no clicks.
    pub conversion_rate: f64,
    pub avg_conversion_rate: f64,
}

/// One day bucket of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Start of the day, milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
    pub value: f64,
}

/// One slice of the visitor-location breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct LocationShare {
    pub name: String,
    pub value: u64,
}

/// Chart payloads, one point per day over the window, oldest first.
#[derive(Debug, Clone, Serialize)]
pub struct ChartBundle {
    pub clicks_over_time: Vec<SeriesPoint>,
    pub submissions_over_time: Vec<SeriesPoint>,
    pub conversion_rate_over_time: Vec<SeriesPoint>,
    pub top_locations: Vec<LocationShare>,
}

/// The full analytics snapshot for a time range and link scope.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsOverview {
    pub overview: OverviewTotals,
    pub charts: ChartBundle,
}

/// Service computing the analytics overview.
pub struct AnalyticsService<L: LinkRepository, E: TrafficEventRepository> {
    link_repository: Arc<L>,
    event_repository: Arc<E>,
}

impl<L: LinkRepository, E: TrafficEventRepository> AnalyticsService<L, E> {
    pub fn new(link_repository: Arc<L>, event_repository: Arc<E>) -> Self {
        Self {
            link_repository,
            event_repository,
        }
    }

    /// Computes the overview for the given window and link scope.
    ///
    /// A scope naming an unknown link yields zero totals and empty series
    /// rather than an error, matching the filter semantics of the stores.
    pub async fn get_overview(
        &self,
        range: TimeRange,
        scope: LinkScope,
    ) -> Result<AnalyticsOverview, AppError> {
        let links = self.link_repository.get_all().await?;

        let mut total_clicks = 0u64;
        let mut total_submissions = 0u64;
        for link in links.iter().filter(|link| scope.includes(link.id)) {
            total_clicks += link.clicks;
            total_submissions += link.submissions;
        }

        let rate = conversion_rate(total_clicks, total_submissions);

        let today = Utc::now().date_naive();
        let window_start = today - Duration::days(range.days() - 1);
        let from = window_start.and_time(NaiveTime::MIN).and_utc();

        let events = self.event_repository.events_since(from, scope).await?;

        let mut buckets: BTreeMap<NaiveDate, (u64, u64)> = BTreeMap::new();
        for event in &events {
            let entry = buckets.entry(event.occurred_at.date_naive()).or_default();
            match event.kind {
                TrafficKind::Click => entry.0 += 1,
                TrafficKind::Submission => entry.1 += 1,
            }
        }

        let mut clicks_over_time = Vec::with_capacity(range.days() as usize);
        let mut submissions_over_time = Vec::with_capacity(range.days() as usize);
        let mut conversion_rate_over_time = Vec::with_capacity(range.days() as usize);

        for offset in 0..range.days() {
            let day = window_start + Duration::days(offset);
            let timestamp_ms = day.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
            let (clicks, submissions) = buckets.get(&day).copied().unwrap_or((0, 0));

            clicks_over_time.push(SeriesPoint {
                timestamp_ms,
                value: clicks as f64,
            });
            submissions_over_time.push(SeriesPoint {
                timestamp_ms,
                value: submissions as f64,
            });
            conversion_rate_over_time.push(SeriesPoint {
                timestamp_ms,
                value: conversion_rate(clicks, submissions),
            });
        }

        Ok(AnalyticsOverview {
            overview: OverviewTotals {
                total_clicks,
                total_submissions,
                conversion_rate: rate,
                avg_conversion_rate: rate,
            },
            charts: ChartBundle {
                clicks_over_time,
                submissions_over_time,
                conversion_rate_over_time,
                top_locations: top_locations(),
            },
        })
    }
}

/// Static visitor-location breakdown; the five shares sum to 100.
pub fn top_locations() -> Vec<LocationShare> {
    [
        ("United States", 45),
        ("Canada", 25),
        ("United Kingdom", 15),
        ("Australia", 10),
        ("Other", 5),
    ]
    .into_iter()
    .map(|(name, value)| LocationShare {
        name: name.to_string(),
        value,
    })
    .collect()
}
