//! Crate-wide error taxonomy.
//!
//! Every fallible operation in the crate returns [`AppError`]. Stores raise
//! `NotFound`, the workflow and service boundaries raise `Validation` before
//! a store call is issued, and `Internal` covers everything else (a real
//! backend would surface timeouts and conflicts here; the in-memory stores
//! never raise it on their own).

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A precondition on caller-supplied data was not met.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The requested id is absent from a store.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Unexpected failure while executing a store call.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::NotFound { .. } => "not_found",
            Self::Internal { .. } => "internal_error",
        }
    }
}
