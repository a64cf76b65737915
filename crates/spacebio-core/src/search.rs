use async_trait::async_trait;
use spacebio_api::BackendClient;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::models::{ApiStatus, HealthStatus, SearchQuery, SearchResult};
use crate::Result;

/// Anything that can answer research queries
///
/// The TUI talks to this trait so tests can swap the HTTP backend out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult>;
    async fn health(&self) -> Result<HealthStatus>;
}

/// Search client backed by the research API over HTTP
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: BackendClient,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: BackendClient::new(base_url)?,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            client: BackendClient::with_timeout(config.base_url.clone(), config.timeout())?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Validate raw input, then search. Empty text never reaches the network.
    pub async fn search_text(&self, text: &str, condition: Option<&str>) -> Result<SearchResult> {
        let query = SearchQuery::new(text, condition)?;
        self.search(&query).await
    }

    /// Raw client, for the diagnostic endpoints
    pub fn backend(&self) -> &BackendClient {
        &self.client
    }
}

#[async_trait]
impl SearchBackend for SearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult> {
        debug!(
            "Searching for {:?} (condition: {:?})",
            query.text(),
            query.condition()
        );
        let response = self.client.search(&query.to_request()).await?;
        info!("Search for {:?} found {}", query.text(), response.organism_name);
        Ok(response.into())
    }

    async fn health(&self) -> Result<HealthStatus> {
        let response = self.client.health().await?;
        Ok(HealthStatus::from_response(&response))
    }
}

/// Pre-flight check before enabling AI search. Never fails: any error
/// degrades to a disconnected status.
pub async fn check_api_status(backend: &dyn SearchBackend) -> ApiStatus {
    match backend.health().await {
        Ok(health) if health.search_enabled() => ApiStatus::ready(),
        Ok(health) => {
            warn!("Backend reachable but not ready: {:?}", health);
            ApiStatus::unavailable()
        }
        Err(e) => {
            warn!("Health check failed: {}", e);
            ApiStatus::unreachable()
        }
    }
}

/// Last-request-wins bookkeeping for in-flight searches
///
/// Each search takes a ticket; only the newest ticket's response may be
/// shown. Invalidating retires every ticket handed out so far.
#[derive(Debug, Default, Clone)]
pub struct SearchGeneration {
    current: u64,
}

impl SearchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search, superseding any outstanding one
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// Retire all outstanding tickets without starting a search
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.current
    }
}
