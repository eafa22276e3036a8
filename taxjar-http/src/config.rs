//! Client configuration.

use std::time::Duration;

use taxjar::constants::{API_VERSION, TIMEOUT_IN_MILLISECONDS};

/// Configuration for a [`Client`](crate::Client).
///
/// Only the API token is mandatory; everything else has a working
/// default. The base URL, version, and headers are captured once at
/// client construction and shared immutably by every call.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use taxjar_http::Config;
///
/// let config = Config::new("9e0cd62a22f451701f29c3bde214")
///     .with_sandbox(true)
///     .with_timeout(Duration::from_secs(5))
///     .with_header("X-Request-Source", "checkout");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// API token used as the bearer credential. Required, non-blank.
    pub token: String,

    /// Explicit base URL. When set and not pointing at the production
    /// host, it is used verbatim instead of the host/version pair.
    pub api_url: Option<String>,

    /// API version segment appended to the canonical hosts.
    pub api_version: String,

    /// Whether to target the sandbox host when no explicit URL is set.
    pub sandbox: bool,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Extra headers applied to every request. Names are matched
    /// case-insensitively against the reserved set.
    pub headers: Vec<(String, String)>,

    /// Optional pre-configured reqwest client. When `None`, a client
    /// is built with the configured timeout.
    pub http_client: Option<reqwest::Client>,
}

impl Config {
    /// Creates a configuration with the given API token and defaults
    /// for everything else.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: None,
            api_version: API_VERSION.to_owned(),
            sandbox: false,
            timeout: Duration::from_millis(TIMEOUT_IN_MILLISECONDS),
            headers: Vec::new(),
            http_client: None,
        }
    }

    /// Sets an explicit base URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Sets the API version segment.
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Targets the sandbox host instead of production.
    #[must_use]
    pub const fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header applied to every request.
    ///
    /// `Authorization` and `Accept` are reserved and silently dropped
    /// at client construction; a `User-Agent` entry replaces the
    /// computed default.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets a pre-configured reqwest client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }
}
