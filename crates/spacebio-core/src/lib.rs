// Core logic for the Space Biology Navigator: routing, navigation and search
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod route;
pub mod search;

pub use catalog::Catalog;
pub use config::Config;
pub use error::Error;
pub use models::{ApiStatus, HealthStatus, OrganismCategory, SearchQuery, SearchResult};
pub use navigation::{ActiveRoute, NavigationCause, NavigationEvent, Navigator, Redirect};
pub use route::{resolve_route, Route};
pub use search::{check_api_status, SearchBackend, SearchClient, SearchGeneration};

/// Result type alias used across the core crate
pub type Result<T> = std::result::Result<T, Error>;
