use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use spacebio_api::{HealthResponse, ScientificDetails as WireDetails, SearchRequest, SearchResponse};

use crate::{Error, Result};

/// Backend marks a component as up with this exact string
pub const HEALTHY: &str = "healthy";

/// A search the user submitted. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    condition: Option<String>,
}

impl SearchQuery {
    /// Validate user input. Text is trimmed and must not end up empty; a
    /// blank condition counts as no condition.
    pub fn new(text: &str, condition: Option<&str>) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Validation("Please enter a search query".to_string()));
        }

        let condition = condition
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(Self {
            text: text.to_string(),
            condition,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn condition(&self) -> Option<&str> {
        self.condition.as_deref()
    }

    pub fn to_request(&self) -> SearchRequest {
        SearchRequest {
            query: self.text.clone(),
            condition: self.condition.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScientificDetails {
    pub classification: String,
    pub response_mechanisms: Vec<String>,
    pub experimental_findings: String,
    pub applications: String,
}

/// What the backend found for a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub organism_name: String,
    pub condition: Option<String>,
    pub description: String,
    pub scientific_details: ScientificDetails,
    pub relevant_chunks: Vec<String>,
}

impl From<SearchResponse> for SearchResult {
    fn from(resp: SearchResponse) -> Self {
        Self {
            organism_name: resp.organism_name,
            condition: resp.condition,
            description: resp.description,
            scientific_details: resp.scientific_details.into(),
            relevant_chunks: resp.relevant_chunks,
        }
    }
}

impl From<WireDetails> for ScientificDetails {
    fn from(d: WireDetails) -> Self {
        Self {
            classification: d.classification,
            response_mechanisms: d.response_mechanisms,
            experimental_findings: d.experimental_findings,
            applications: d.applications,
        }
    }
}

/// Summary of `GET /health`, used to gate search submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    pub api_healthy: bool,
    /// The language model the backend depends on
    pub dependency_healthy: bool,
    /// Shown for information only; does not gate search
    pub database_healthy: bool,
}

impl HealthStatus {
    pub fn from_response(resp: &HealthResponse) -> Self {
        Self {
            api_healthy: resp.api == HEALTHY,
            dependency_healthy: resp.openai == HEALTHY,
            database_healthy: resp.mongodb == HEALTHY,
        }
    }

    pub fn search_enabled(&self) -> bool {
        self.api_healthy && self.dependency_healthy
    }
}

/// Connection badge the dashboard shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiStatus {
    pub connected: bool,
    pub message: String,
}

impl ApiStatus {
    pub fn ready() -> Self {
        Self {
            connected: true,
            message: "AI Search Ready".to_string(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            connected: false,
            message: "AI Search Unavailable".to_string(),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            connected: false,
            message: "Failed to connect to API".to_string(),
        }
    }
}

/// Organism groups, each with a fixed presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganismCategory {
    Plant,
    Microbe,
    Animal,
    HumanCells,
    #[serde(other)]
    Other,
}

impl OrganismCategory {
    pub fn icon(&self) -> &'static str {
        match self {
            OrganismCategory::Plant => "🌿",
            OrganismCategory::Microbe => "🔬",
            OrganismCategory::Animal => "🪰",
            OrganismCategory::HumanCells => "🧬",
            OrganismCategory::Other => "📄",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrganismCategory::Plant => "plant",
            OrganismCategory::Microbe => "microbe",
            OrganismCategory::Animal => "animal",
            OrganismCategory::HumanCells => "human cells",
            OrganismCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organism {
    pub id: String,
    pub name: String,
    pub common_name: Option<String>,
    pub scientific_name: Option<String>,
    pub synonyms: Vec<String>,
    pub category: OrganismCategory,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub experiment_count: u32,
}

impl Organism {
    /// Case-insensitive match against every name the organism goes by.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        let hit = |s: &str| s.to_lowercase().contains(needle);
        hit(&self.name)
            || self.common_name.as_deref().is_some_and(hit)
            || self.scientific_name.as_deref().is_some_and(hit)
            || self.synonyms.iter().any(|s| hit(s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub publication_date: Option<NaiveDate>,
    pub journal: Option<String>,
    pub doi: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub pdf_url: Option<String>,
    pub summary: Option<String>,
    pub key_findings: Vec<String>,
}

impl Paper {
    /// First three authors, then "et al."
    pub fn author_line(&self) -> String {
        let mut line = self
            .authors
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if self.authors.len() > 3 {
            line.push_str(" et al.");
        }
        line
    }

    pub fn year(&self) -> Option<i32> {
        self.publication_date.map(|d| d.year())
    }

    /// `needle` must already be lowercase
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.authors.iter().any(|a| a.to_lowercase().contains(needle))
            || self
                .summary
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub id: String,
    pub paper_id: Option<String>,
    pub organism_id: Option<String>,
    pub conditions: Vec<String>,
    pub duration_days: Option<u32>,
    pub key_results: Option<String>,
    pub metrics: BTreeMap<String, f64>,
}

/// An experiment joined to the paper that reported it
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentWithDetails {
    pub experiment: Experiment,
    pub paper: Paper,
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacebio_api::ScientificDetails as Wire;

    #[test]
    fn test_empty_query_is_rejected() {
        for text in ["", "   ", "\t\n"] {
            let err = SearchQuery::new(text, None).unwrap_err();
            assert!(matches!(err, Error::Validation(_)));
        }
    }

    #[test]
    fn test_query_is_trimmed_and_blank_condition_dropped() {
        let q = SearchQuery::new("  yeast space ", Some("  ")).unwrap();
        assert_eq!(q.text(), "yeast space");
        assert_eq!(q.condition(), None);

        let q = SearchQuery::new("yeast", Some(" Microgravity ")).unwrap();
        assert_eq!(q.to_request().condition.as_deref(), Some("Microgravity"));
    }

    #[test]
    fn test_search_result_from_wire() {
        let wire = SearchResponse {
            organism_name: "Drosophila melanogaster".into(),
            condition: None,
            description: "Fruit fly".into(),
            scientific_details: Wire {
                classification: "Insecta".into(),
                response_mechanisms: vec!["immune shift".into()],
                experimental_findings: "Altered immunity".into(),
                applications: "Astronaut health".into(),
            },
            relevant_chunks: vec!["a".into()],
        };
        let result = SearchResult::from(wire);
        assert_eq!(result.organism_name, "Drosophila melanogaster");
        assert_eq!(result.scientific_details.response_mechanisms, ["immune shift"]);
        assert_eq!(result.relevant_chunks, ["a"]);
    }

    #[test]
    fn test_health_gate_follows_api_and_model() {
        let resp = HealthResponse {
            api: "healthy".into(),
            mongodb: "disconnected".into(),
            openai: "healthy".into(),
        };
        let status = HealthStatus::from_response(&resp);
        assert!(status.search_enabled());
        assert!(!status.database_healthy);

        let resp = HealthResponse {
            api: "healthy".into(),
            mongodb: "healthy".into(),
            openai: "error: invalid key".into(),
        };
        assert!(!HealthStatus::from_response(&resp).search_enabled());
    }

    #[test]
    fn test_unknown_category_maps_to_other() {
        let c: OrganismCategory = serde_json::from_str(r#""fungus""#).unwrap();
        assert_eq!(c, OrganismCategory::Other);
        let c: OrganismCategory = serde_json::from_str(r#""human_cells""#).unwrap();
        assert_eq!(c.label(), "human cells");
    }

    #[test]
    fn test_author_line_truncates() {
        let mut paper = Paper {
            id: "1".into(),
            title: "T".into(),
            authors: vec!["A".into(), "B".into(), "C".into()],
            publication_date: NaiveDate::from_ymd_opt(2023, 8, 15),
            journal: None,
            doi: None,
            abstract_text: None,
            pdf_url: None,
            summary: None,
            key_findings: vec![],
        };
        assert_eq!(paper.author_line(), "A, B, C");
        paper.authors.push("D".into());
        assert_eq!(paper.author_line(), "A, B, C et al.");
        assert_eq!(paper.year(), Some(2023));
    }
}
