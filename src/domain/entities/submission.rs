//! Form submission entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Values captured from a completed form, keyed by field name.
pub type SubmissionData = BTreeMap<String, String>;

/// A completed form submission attached to a gated link.
///
/// Immutable once created except for deletion. `link_id` is a non-owning
/// reference; the link may be deleted while its submissions remain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub link_id: i64,
    pub data: SubmissionData,
    pub submitted_at: DateTime<Utc>,
}

/// Input data for recording a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubmission {
    pub link_id: i64,
    pub data: SubmissionData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_serde_roundtrip() {
        let mut data = SubmissionData::new();
        data.insert("email".to_string(), "jane@example.com".to_string());
        data.insert("name".to_string(), "Jane".to_string());

        let submission = Submission {
            id: 1,
            link_id: 3,
            data,
            submitted_at: Utc::now(),
        };

        let json = serde_json::to_string(&submission).unwrap();
        let parsed: Submission = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id, 1);
        assert_eq!(parsed.link_id, 3);
        assert_eq!(parsed.data.get("email").unwrap(), "jane@example.com");
    }
}
