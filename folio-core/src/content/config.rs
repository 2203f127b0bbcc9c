//! Configuration for remote content synchronization

use std::time::Duration;

/// Configuration for the content gateway
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Base URL of the content service API (e.g., "https://example.com/api")
    pub api_base: String,

    /// HTTP timeout for requests
    pub timeout: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:8080/api".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl SyncConfig {
    /// Configure with a custom API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Configure with a custom request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
