// Wire types exchanged with the backend. Field names follow the backend's
// snake_case JSON exactly.
use serde::{Deserialize, Serialize};

/// Body of `POST /search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScientificDetails {
    pub classification: String,
    #[serde(default)]
    pub response_mechanisms: Vec<String>,
    pub experimental_findings: String,
    pub applications: String,
}

/// Success body of `POST /search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub organism_name: String,
    #[serde(default)]
    pub condition: Option<String>,
    pub description: String,
    pub scientific_details: ScientificDetails,
    #[serde(default)]
    pub relevant_chunks: Vec<String>,
}

/// Body of `GET /health`. Each field is "healthy" or a free-form problem
/// description such as "disconnected" or "error: ...".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub api: String,
    pub mongodb: String,
    pub openai: String,
}

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

/// Body of `GET /test-llm`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestLlmResponse {
    pub status: String,
    pub llm_response: Option<String>,
    #[serde(default)]
    pub response_length: usize,
    #[serde(default)]
    pub is_json: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error bodies carry an optional `detail` string
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
