//! Service configuration.

use std::time::Duration;

/// Local archive endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:64428";

/// Where the service sends requests and how long the transport waits.
///
/// Timeouts are transport policy; `None` leaves reqwest's defaults in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: None,
            connect_timeout: None,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
