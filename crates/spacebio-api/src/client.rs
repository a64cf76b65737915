use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ApiError, Result};
use crate::models::{
    ErrorBody, HealthResponse, RootResponse, SearchRequest, SearchResponse, TestLlmResponse,
};

/// Where the backend lives during local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Thin request/response wrapper around the research backend
///
/// No retries, no caching, no deduplication: one call, one request.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Client with the transport's default timeout behaviour
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Client that gives up on any request after `timeout`
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(concat!(
                "spacebio/",
                env!("CARGO_PKG_VERSION")
            )),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::from_transport)?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the backend to research an organism
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let url = self.url("/search");
        self.send(self.client.post(&url).json(request), &url).await
    }

    /// Backend and dependency health
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = self.url("/health");
        self.send(self.client.get(&url), &url).await
    }

    /// Liveness banner served at the API root
    pub async fn root(&self) -> Result<RootResponse> {
        let url = self.url("/");
        self.send(self.client.get(&url), &url).await
    }

    /// Round-trip a canned prompt through the backend's language model
    pub async fn test_llm(&self) -> Result<TestLlmResponse> {
        let url = self.url("/test-llm");
        self.send(self.client.get(&url), &url).await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<T> {
        debug!("Sending request to {}", url);

        let response = request.send().await.map_err(|e| {
            warn!("API request failed for {}: {}", url, e);
            ApiError::from_transport(e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::from_transport)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail)
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            warn!("API request to {} returned {}: {}", url, status, message);
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|e| {
            warn!("Malformed response from {}: {}", url, e);
            ApiError::Decode(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = BackendClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/search"), "http://localhost:8000/search");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Port 9 (discard) is essentially never listening on loopback
        let client = BackendClient::new("http://127.0.0.1:9").unwrap();
        let result = client.health().await;
        assert!(matches!(result, Err(ApiError::Network(_))), "{:?}", result);
    }
}
