//! Client for the Claude text-completion API

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::{debug, warn};

use super::types::{CompletionResponse, PromptRequest};
use crate::config::{ClientConfig, ClientOption};
use crate::error::{ClientError, DecodeError, Result};

/// Client for sending prompts to the completion endpoint.
///
/// Holds only its configuration, so one instance can serve concurrent
/// callers; each `send_prompt` call owns its own request and response.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
}

impl Client {
    /// Create a new Client with the default endpoint and transport
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a new Client, applying `options` in order over the defaults
    pub fn with_options(
        api_key: impl Into<String>,
        options: impl IntoIterator<Item = ClientOption>,
    ) -> Self {
        let config = options
            .into_iter()
            .fold(ClientConfig::new(api_key), ClientConfig::apply);
        Self::with_config(config)
    }

    /// Create a new Client from a complete configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Get the configuration this client sends with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a prompt and return the completion text.
    ///
    /// Exactly one `POST {base_url}/complete` is issued. Nothing is retried;
    /// every failure is returned as a [`ClientError`] and the client stays
    /// usable afterwards.
    pub async fn send_prompt(&self, prompt: &str) -> Result<String> {
        let payload =
            serde_json::to_vec(&PromptRequest { prompt }).map_err(ClientError::Encoding)?;

        let url = self.config.complete_url();
        let request = self
            .config
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.config.api_key)
            .body(payload)
            .build()
            .map_err(ClientError::RequestBuild)?;

        debug!("Sending prompt to {} ({} chars)", url, prompt.chars().count());

        let response = self
            .config
            .http_client
            .execute(request)
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        debug!("Completion response status: {}", status);

        if status != StatusCode::OK {
            warn!("Completion request to {} failed with {}", url, status);
            let body = response.text().await.ok();
            return Err(ClientError::Api { status, body });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Decoding(DecodeError::Body(e)))?;
        let completion: CompletionResponse = serde_json::from_slice(&body)
            .map_err(|e| ClientError::Decoding(DecodeError::Json(e)))?;

        completion.result.ok_or(ClientError::ResponseShape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_defaults() {
        let client = Client::new("sk-test");
        assert_eq!(client.config().base_url, crate::DEFAULT_BASE_URL);
        assert_eq!(client.config().api_key, "sk-test");
    }

    #[test]
    fn test_client_with_options() {
        let client = Client::with_options(
            "sk-test",
            [ClientOption::BaseUrl("http://localhost:9999".to_string())],
        );
        assert_eq!(
            client.config().complete_url(),
            "http://localhost:9999/complete"
        );
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Client>();
    }
}
