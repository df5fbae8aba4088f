//! Application configuration loaded from environment variables.
//!
//! ## Variables
//!
//! - `GATED_BASE_URL` - Prefix for generated gated URLs
//!   (default: `https://gatelink.pro/g/`). Must end with `/`.
//! - `RUST_LOG` - Log level (default: `info`).
//! - `SIMULATED_LATENCY_MS` - Optional fixed delay per store operation,
//!   emulating network round trips. Unset means no delay.

use std::env;
use std::sync::Arc;

use anyhow::{Result, bail};

use crate::infrastructure::latency::{FixedLatency, LatencyPolicy, NoLatency};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub gated_base_url: String,
    pub log_level: String,
    pub simulated_latency_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gated_base_url: "https://gatelink.pro/g/".to_string(),
            log_level: "info".to_string(),
            simulated_latency_ms: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `GATED_BASE_URL` does not end with `/` or if
    /// `SIMULATED_LATENCY_MS` is not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let gated_base_url =
            env::var("GATED_BASE_URL").unwrap_or_else(|_| defaults.gated_base_url.clone());
        if !gated_base_url.ends_with('/') {
            bail!("GATED_BASE_URL must end with a trailing slash");
        }

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| defaults.log_level.clone());

        let simulated_latency_ms = match env::var("SIMULATED_LATENCY_MS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(ms) => Some(ms),
                Err(_) => bail!("SIMULATED_LATENCY_MS must be an integer, got {raw:?}"),
            },
            Err(_) => None,
        };

        Ok(Self {
            gated_base_url,
            log_level,
            simulated_latency_ms,
        })
    }

    /// The latency strategy the stores should await per operation.
    pub fn latency(&self) -> Arc<dyn LatencyPolicy> {
        match self.simulated_latency_ms {
            Some(ms) => Arc::new(FixedLatency::from_millis(ms)),
            None => Arc::new(NoLatency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.gated_base_url, "https://gatelink.pro/g/");
        assert_eq!(config.log_level, "info");
        assert!(config.simulated_latency_ms.is_none());
    }
}
