//! Client configuration: endpoint, credential and transport

use lazy_static::lazy_static;
use std::fmt;

/// Canonical public API root. `/complete` is appended per request.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";

lazy_static! {
    /// Transport shared by every client that does not bring its own.
    ///
    /// `reqwest::Client` keeps its connection pool behind an `Arc`, so
    /// clones handed out from here all reuse the same connections.
    pub static ref DEFAULT_HTTP_CLIENT: reqwest::Client = reqwest::Client::new();
}

/// A single configuration override applied on top of the defaults
#[derive(Debug, Clone)]
pub enum ClientOption {
    /// Replace the API root the `/complete` path is appended to
    BaseUrl(String),
    /// Replace the HTTP transport (timeouts, proxies, TLS settings live here)
    HttpClient(reqwest::Client),
}

/// Configuration for a [`crate::Client`]
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub http_client: reqwest::Client,
}

impl ClientConfig {
    /// Create a config with the default endpoint and shared transport.
    ///
    /// The key is not validated; an empty key produces unauthenticated
    /// requests that the server rejects.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client: DEFAULT_HTTP_CLIENT.clone(),
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP client used to transmit requests
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = http_client;
        self
    }

    /// Apply one option. Later options override earlier ones.
    pub fn apply(self, option: ClientOption) -> Self {
        match option {
            ClientOption::BaseUrl(base_url) => self.with_base_url(base_url),
            ClientOption::HttpClient(http_client) => self.with_http_client(http_client),
        }
    }

    /// Full URL of the completion endpoint
    pub fn complete_url(&self) -> String {
        let base = self.base_url.strip_suffix('/').unwrap_or(&self.base_url);
        format!("{}/complete", base)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
