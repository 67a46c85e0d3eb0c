//! Client configuration: API endpoint, proxy and timeouts.
//!
//! Everything here is forwarded opaquely to the HTTP transport; the SDK
//! validates none of it beyond what `reqwest` requires at build time.

use std::time::Duration;

/// Default platform API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.vantage.video";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Transport configuration for a [`crate::Client`].
///
/// A bare URL string converts into a config overriding only the endpoint:
///
/// ```
/// use vantage::ClientConfig;
///
/// let config: ClientConfig = "https://api.example.com".into();
/// assert_eq!(config.api_url, "https://api.example.com");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the platform API.
    pub api_url: String,

    /// Optional HTTP proxy URL, forwarded to the transport.
    pub proxy: Option<String>,

    /// Total request timeout, forwarded to the transport. On expiry the
    /// failure surfaces as `VantageError::Transport`.
    pub timeout: Duration,

    /// Connection establishment timeout.
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            proxy: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create a config with the default endpoint and timeouts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API endpoint. A trailing slash is stripped so paths
    /// concatenate cleanly.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    /// Route requests through an HTTP proxy.
    #[must_use]
    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy = Some(proxy_url.into());
        self
    }

    /// Set the total request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connection establishment timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}

impl From<&str> for ClientConfig {
    fn from(api_url: &str) -> Self {
        Self::default().with_api_url(api_url)
    }
}

impl From<String> for ClientConfig {
    fn from(api_url: String) -> Self {
        Self::default().with_api_url(api_url)
    }
}
