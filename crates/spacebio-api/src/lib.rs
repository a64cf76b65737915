// HTTP client for the space biology research backend
pub mod client;
pub mod error;
pub mod models;

// Re-export common types
pub use client::{BackendClient, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use models::{
    HealthResponse, RootResponse, ScientificDetails, SearchRequest, SearchResponse,
    TestLlmResponse,
};
