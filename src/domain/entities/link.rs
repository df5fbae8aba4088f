//! Gated link entity and its creation/update payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::hex_color::validate_hex_color;

/// Publication state of a gated link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    Active,
    Paused,
}

impl LinkStatus {
    /// The opposite state, used by the status-toggle control.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Paused,
            Self::Paused => Self::Active,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
        }
    }
}

/// Landing-page customization embedded in a link.
///
/// Colors are hex codes (`#RGB` or `#RRGGBB`), checked at the service
/// boundary via the `validator` derive.
#[derive(Debug, Clone, PartialEq, Eq, Validate, Serialize, Deserialize)]
pub struct Customization {
    #[validate(custom(function = validate_hex_color))]
    pub background_color: String,
    #[validate(custom(function = validate_hex_color))]
    pub button_color: String,
    #[validate(custom(function = validate_hex_color))]
    pub text_color: String,
    pub headline: String,
    pub description: String,
    #[serde(default)]
    pub cover_image: String,
}

impl Default for Customization {
    /// Stock landing page shown before the user customizes anything.
    fn default() -> Self {
        Self {
            background_color: "#FFFFFF".to_string(),
            button_color: "#007AFF".to_string(),
            text_color: "#1C1C1E".to_string(),
            headline: "Access Premium Content".to_string(),
            description: "Please fill out this quick form to access your requested content."
                .to_string(),
            cover_image: String::new(),
        }
    }
}

/// A gated link: a shareable URL that redirects to `original_url` only after
/// a visitor completes the referenced form.
///
/// `form_id` is a non-owning reference; the referenced form may be deleted
/// independently. `gated_url` is assigned at creation and immutable after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub form_id: i64,
    pub customization: Customization,
    pub gated_url: String,
    pub status: LinkStatus,
    pub clicks: u64,
    pub submissions: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Conversion rate of this link as a percentage.
    pub fn conversion_rate(&self) -> f64 {
        conversion_rate(self.clicks, self.submissions)
    }
}

/// Conversion rate as a percentage, rounded to one decimal place.
///
/// Defined as 0 when there are no clicks.
pub fn conversion_rate(clicks: u64, submissions: u64) -> f64 {
    if clicks == 0 {
        return 0.0;
    }

    let rate = submissions as f64 / clicks as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

/// Input data for creating a gated link.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
pub struct NewLink {
    #[validate(url(message = "original_url must be a valid URL"))]
    pub original_url: String,
    pub form_id: i64,
    #[validate(nested)]
    pub customization: Customization,
    /// Defaults to [`LinkStatus::Active`] when not provided.
    #[serde(default)]
    pub status: Option<LinkStatus>,
}

/// Partial update for an existing link.
///
/// `None` fields are left unchanged. `gated_url` and the traffic counters
/// are server-owned and deliberately not patchable.
#[derive(Debug, Clone, Default)]
pub struct LinkPatch {
    pub original_url: Option<String>,
    pub form_id: Option<i64>,
    pub customization: Option<Customization>,
    pub status: Option<LinkStatus>,
}

impl LinkPatch {
    /// A patch that only changes the publication state.
    pub fn status(status: LinkStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
