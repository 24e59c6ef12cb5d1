//! Web search backends and the credential-driven fallback chain.
//!
//! Backends are tried in a fixed order: Brave Search, SerpAPI, then the demo
//! backend. The first one with credentials handles the query; its failure is
//! the request's failure; the chain is not walked again on error.

mod brave;
mod demo;
mod serpapi;

pub use brave::{BRAVE_BASE_URL, BraveSearch};
pub use demo::DemoSearch;
pub use serpapi::{SERPAPI_BASE_URL, SerpApiSearch};

use crate::config::Config;
use crate::model::SearchResult;
use crate::{Result, SiftError};

/// One candidate in the search fallback chain.
#[derive(Debug, Clone)]
pub enum SearchBackend {
    Brave(BraveSearch),
    SerpApi(SerpApiSearch),
    Demo(DemoSearch),
}

impl SearchBackend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Brave(_) => "brave",
            Self::SerpApi(_) => "serpapi",
            Self::Demo(_) => "demo",
        }
    }

    pub fn is_available(&self) -> bool {
        match self {
            Self::Brave(backend) => backend.is_available(),
            Self::SerpApi(backend) => backend.is_available(),
            Self::Demo(_) => true,
        }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        match self {
            Self::Brave(backend) => backend.search(query).await,
            Self::SerpApi(backend) => backend.search(query).await,
            Self::Demo(backend) => Ok(backend.results(query)),
        }
    }
}

/// Runs queries against the first available backend.
#[derive(Debug, Clone)]
pub struct SearchService {
    backends: Vec<SearchBackend>,
}

impl SearchService {
    pub fn new(backends: Vec<SearchBackend>) -> Self {
        Self { backends }
    }

    /// Brave, then SerpAPI, then demo, keyed by the configured credentials.
    pub fn from_config(config: &Config) -> Self {
        Self::new(vec![
            SearchBackend::Brave(BraveSearch::new(config.brave_api_key.clone())),
            SearchBackend::SerpApi(SerpApiSearch::new(config.serpapi_key.clone())),
            SearchBackend::Demo(DemoSearch),
        ])
    }

    /// The backend that would serve the next query.
    pub fn active_backend(&self) -> Option<&SearchBackend> {
        self.backends.iter().find(|backend| backend.is_available())
    }

    /// # Errors
    ///
    /// Propagates the selected backend's error, or [`SiftError::NoBackend`]
    /// when the chain has no available entry.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let backend = self.active_backend().ok_or(SiftError::NoBackend { role: "search" })?;

        match backend.search(query).await {
            Ok(results) => {
                tracing::debug!(backend = backend.name(), count = results.len(), "search completed");
                Ok(results)
            }
            Err(err) => {
                tracing::warn!(backend = backend.name(), error = %err, "search failed");
                Err(err)
            }
        }
    }
}
