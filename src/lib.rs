//! # GateLink
//!
//! Core of a gated-link lead-capture product: users wrap an original URL
//! behind a lead-capture form, share the generated gated URL, and track
//! clicks, submissions, and conversion analytics.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, the traffic event model, and
//!   repository traits
//! - **Application Layer** ([`application`]) - Services, the analytics
//!   aggregator, and the link-creation workflow state machine
//! - **Infrastructure Layer** ([`infrastructure`]) - Fixture-seeded
//!   in-memory stores and the simulated-latency policy
//!
//! There is no network surface: store calls are in-process, and the bundled
//! `admin` binary is the interactive entry point.
//!
//! ## Quick Start
//!
//! ```bash
//! # List seeded links
//! cargo run --bin admin -- links list
//!
//! # Show the analytics overview for the last 30 days
//! cargo run --bin admin -- analytics --range 30d
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]; see the
//! [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub use error::AppError;
pub use state::AppContext;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AnalyticsService, FormService, LinkService, SubmissionService,
    };
    pub use crate::application::workflow::{LinkCreator, WorkflowAdvance, WorkflowStep};
    pub use crate::config::Config;
    pub use crate::domain::entities::{
        Customization, Form, Link, LinkPatch, LinkStatus, NewForm, NewLink, NewSubmission,
        Submission, conversion_rate,
    };
    pub use crate::domain::repositories::{LinkScope, TimeRange};
    pub use crate::error::AppError;
    pub use crate::state::AppContext;
}
