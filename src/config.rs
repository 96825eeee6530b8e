//! Client configuration.

use std::time::Duration;

/// Request timeout applied when none is configured explicitly.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for connecting to the backend API.
///
/// Constructed by the embedder and handed to [`crate::client::ApiClient`];
/// there is no ambient global configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the given base URL, including the `/api`
    /// path prefix (e.g. `https://printshop.example/api`).
    ///
    /// Trailing slashes are trimmed so endpoint paths can always start with one.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Timeout handed to the underlying transport.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
