//! Configuration management for GAV.
//!
//! All configuration is driven by environment variables.

use std::time::Duration;

use tracing::warn;

/// Default freshness window, in minutes.
const DEFAULT_TIME_WINDOW_MINUTES: u64 = 15;

/// Global configuration for GAV signers and verifiers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GavConfig {
    /// Maximum allowed clock skew between a request timestamp and the
    /// verifier's clock, in minutes.
    pub time_window_minutes: u64,
    /// Log level.
    pub log_level: String,
}

impl Default for GavConfig {
    fn default() -> Self {
        Self {
            time_window_minutes: DEFAULT_TIME_WINDOW_MINUTES,
            log_level: "info".to_owned(),
        }
    }
}

impl GavConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `GAV_TIME_WINDOW_MINUTES` | `15` |
    /// | `LOG_LEVEL` | `info` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to resolve variable names.
    ///
    /// Unparseable values are logged and the default is kept.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("GAV_TIME_WINDOW_MINUTES") {
            match v.trim().parse::<u64>() {
                Ok(minutes) => config.time_window_minutes = minutes,
                Err(e) => warn!(
                    value = %v,
                    error = %e,
                    "ignoring invalid GAV_TIME_WINDOW_MINUTES"
                ),
            }
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// The freshness window as a [`Duration`].
    #[must_use]
    pub fn time_window(&self) -> Duration {
        Duration::from_secs(self.time_window_minutes.saturating_mul(60))
    }
}
