//! HTTP client with bounded retry
//!
//! This module provides the JSON request plumbing every console service
//! call goes through. Transient failures (network errors, 5xx responses)
//! are retried a fixed number of times with a fixed cooperative delay;
//! 4xx responses surface immediately with the server's detail message
//! when the error body carries one.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::error::ClientError;

/// Configuration for the HTTP client
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// Base URL of the console API (e.g. "http://127.0.0.1:8000")
    pub base_url: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds
    pub read_timeout_ms: u64,
    /// Additional attempts after a transient failure
    pub max_retries: u32,
    /// Fixed delay between attempts in milliseconds
    pub retry_delay_ms: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
            max_retries: 3,
            retry_delay_ms: 1000,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config for the given base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }

    /// Set the retry bound and inter-attempt delay
    pub fn with_retries(mut self, max_retries: u32, retry_delay_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.retry_delay_ms = retry_delay_ms;
        self
    }
}

/// JSON HTTP client with bounded retry for transient failures
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(config: HttpClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Build full URL from the configured base
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request_with_retry(path, |client, url| client.get(url))
            .await
    }

    /// Make a GET request with query parameters
    ///
    /// The query layer hands over canonical pairs, so nothing empty or
    /// absent ever reaches the URL.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ClientError> {
        self.request_with_retry(path, |client, url| client.get(url).query(query))
            .await
    }

    /// Make a POST request with a JSON body
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.request_with_retry(path, |client, url| client.post(url).json(body))
            .await
    }

    /// Make a PUT request with a JSON body
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.request_with_retry(path, |client, url| client.put(url).json(body))
            .await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request_with_retry(path, |client, url| client.delete(url))
            .await
    }

    /// Generic request with retry for transient failures
    ///
    /// Network errors and 5xx responses are retried up to the configured
    /// bound; anything below 500 goes straight to response handling.
    async fn request_with_retry<T, F>(&self, path: &str, build: F) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        F: Fn(&Client, &str) -> RequestBuilder,
    {
        let url = self.build_url(path);
        let mut retries_left = self.config.max_retries;

        loop {
            match build(&self.client, &url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_server_error() && retries_left > 0 {
                        warn!(
                            "Request to {} failed with status {}, retrying ({} left)",
                            url, status, retries_left
                        );
                        retries_left -= 1;
                        tokio::time::sleep(Duration::from_millis(self.config.retry_delay_ms))
                            .await;
                        continue;
                    }
                    return self.handle_response(response).await;
                }
                Err(e) => {
                    if retries_left > 0 {
                        warn!("Request to {} failed: {}, retrying ({} left)", url, e, retries_left);
                        retries_left -= 1;
                        tokio::time::sleep(Duration::from_millis(self.config.retry_delay_ms))
                            .await;
                        continue;
                    }
                    error!("Request to {} failed after retries: {}", url, e);
                    return Err(e.into());
                }
            }
        }
    }

    /// Handle a terminal response: decode JSON on success, build a
    /// structured error otherwise
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            debug!("Request succeeded with status {}", status);
            let body = response.text().await?;
            return serde_json::from_str(&body).map_err(ClientError::Decode);
        }

        // A malformed error body degrades to the generic message; it
        // must never mask the HTTP failure itself.
        let body = response.text().await.unwrap_or_default();
        let parsed: Option<Value> = serde_json::from_str(&body).ok();
        let message = parsed
            .as_ref()
            .and_then(|value| value.get("detail"))
            .and_then(|detail| detail.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));

        error!("Request failed with status {}: {}", status, message);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
            body: parsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpClientConfig::default();
        assert_eq!(config.connect_timeout_ms, 5000);
        assert_eq!(config.read_timeout_ms, 30000);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay_ms, 1000);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpClientConfig::new("http://localhost:8000/")
            .with_timeouts(3000, 15000)
            .with_retries(5, 250);

        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.connect_timeout_ms, 3000);
        assert_eq!(config.read_timeout_ms, 15000);
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.retry_delay_ms, 250);
    }

    #[test]
    fn test_build_url() {
        let client = HttpClient::new(HttpClientConfig::new("http://localhost:8000")).unwrap();
        assert_eq!(client.build_url("/cameras/"), "http://localhost:8000/cameras/");
    }
}
