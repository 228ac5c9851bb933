//! Tunables for the dispatch loop and the outbound HTTP client.

use std::time::Duration;

use crate::error::DispatchError;

/// Endpoint every signup submission is posted to unless overridden
pub const DEFAULT_ENDPOINT: &str = "https://id.stpr.com/api/email/signup-provision";

/// Pause between two consecutive submissions
pub const DEFAULT_DELAY: Duration = Duration::from_millis(10);

/// Settings of the dispatch loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherSettings {
    pub delay: Duration,
}

impl DispatcherSettings {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for DispatcherSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings of the HTTP client used by the request executor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub endpoint: String,
    /// Whole-request timeout; a timed out request is a transport failure
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
}

impl ClientSettings {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            request_timeout: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Request timeout from a number of seconds; zero, negative or NaN means none.
///
/// Values too large for a [`Duration`] (including infinity) are rejected.
pub fn timeout_from_secs(secs: f64) -> Result<Option<Duration>, DispatchError> {
    if secs.is_nan() || secs <= 0. {
        return Ok(None);
    }
    Duration::try_from_secs_f64(secs)
        .map(Some)
        .map_err(|e| DispatchError::ConfigurationError(format!("invalid timeout `{secs}`: {e}")))
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
