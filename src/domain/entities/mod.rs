//! Core business entities.

mod form;
mod link;
mod submission;

pub use form::{Form, FormFieldDef, FormPatch, FormTheme, NewForm};
pub use link::{Customization, Link, LinkPatch, LinkStatus, NewLink, conversion_rate};
pub use submission::{NewSubmission, Submission, SubmissionData};
