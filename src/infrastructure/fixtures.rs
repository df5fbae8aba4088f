//! Embedded seed data for the in-memory stores.
//!
//! Each store seeds from a static JSON document at context construction.
//! Counters in `links.json` are lifetime totals; `events.json` carries a
//! recent sample of the traffic log that backs the analytics series.

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::domain::entities::{Form, Link, Submission};
use crate::domain::traffic_event::TrafficEvent;
use crate::error::AppError;

const LINKS_JSON: &str = include_str!("../../fixtures/links.json");
const FORMS_JSON: &str = include_str!("../../fixtures/forms.json");
const SUBMISSIONS_JSON: &str = include_str!("../../fixtures/submissions.json");
const EVENTS_JSON: &str = include_str!("../../fixtures/events.json");

/// Parsed seed documents for all four stores.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub links: Vec<Link>,
    pub forms: Vec<Form>,
    pub submissions: Vec<Submission>,
    pub events: Vec<TrafficEvent>,
}

/// Loads the embedded seed documents.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if an embedded document does not match the
/// entity shape.
pub fn seed_data() -> Result<SeedData, AppError> {
    Ok(SeedData {
        links: parse(LINKS_JSON, "links")?,
        forms: parse(FORMS_JSON, "forms")?,
        submissions: parse(SUBMISSIONS_JSON, "submissions")?,
        events: parse(EVENTS_JSON, "events")?,
    })
}

fn parse<T: DeserializeOwned>(raw: &str, fixture: &str) -> Result<Vec<T>, AppError> {
    serde_json::from_str(raw).map_err(|e| {
        AppError::internal(
            "Malformed seed fixture",
            json!({ "fixture": fixture, "reason": e.to_string() }),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LinkStatus;

    #[test]
    fn test_fixtures_parse() {
        let seed = seed_data().unwrap();

        assert_eq!(seed.links.len(), 5);
        assert_eq!(seed.forms.len(), 3);
        assert_eq!(seed.submissions.len(), 6);
        assert!(!seed.events.is_empty());
    }

    #[test]
    fn test_links_are_newest_first() {
        let seed = seed_data().unwrap();
        let ids: Vec<i64> = seed.links.iter().map(|l| l.id).collect();

        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_links_reference_seeded_forms() {
        let seed = seed_data().unwrap();

        for link in &seed.links {
            assert!(
                seed.forms.iter().any(|form| form.id == link.form_id),
                "link {} references missing form {}",
                link.id,
                link.form_id
            );
        }
    }

    #[test]
    fn test_seed_contains_paused_link() {
        let seed = seed_data().unwrap();

        assert!(
            seed.links
                .iter()
                .any(|link| link.status == LinkStatus::Paused)
        );
    }

    #[test]
    fn test_submission_counters_cover_seeded_submissions() {
        let seed = seed_data().unwrap();

        for link in &seed.links {
            let recorded = seed
                .submissions
                .iter()
                .filter(|s| s.link_id == link.id)
                .count() as u64;

            assert!(link.submissions >= recorded);
            assert!(link.submissions <= link.clicks);
        }
    }
}
