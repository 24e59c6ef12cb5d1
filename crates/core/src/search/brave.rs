//! Brave Search web API backend.

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use url::Url;

use crate::http::{provider_client, read_json};
use crate::model::SearchResult;
use crate::{Result, SiftError};

const NAME: &str = "Brave Search";

/// Default API root.
pub const BRAVE_BASE_URL: &str = "https://api.search.brave.com";

/// Queries `GET /res/v1/web/search` with an `X-Subscription-Token`.
#[derive(Clone)]
pub struct BraveSearch {
    api_key: Option<String>,
    base_url: String,
    client: Client,
}

impl std::fmt::Debug for BraveSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BraveSearch")
            .field("base_url", &self.base_url)
            .field("has_key", &self.api_key.is_some())
            .finish()
    }
}

impl BraveSearch {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key, base_url: BRAVE_BASE_URL.to_string(), client: provider_client() }
    }

    /// Point the backend at another API root, e.g. a local mock server.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SiftError::ConfigError("Brave Search API key is not set".into()))?;

        let endpoint = format!("{}/res/v1/web/search", self.base_url.trim_end_matches('/'));
        let url = Url::parse_with_params(&endpoint, &[("q", query), ("count", "10")])
            .map_err(|e| SiftError::InvalidUrl(format!("{endpoint}: {e}")))?;

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header("X-Subscription-Token", api_key)
            .send()
            .await?;

        let body: BraveResponse = read_json(response, NAME).await?;
        Ok(body.into_results())
    }
}

#[derive(Debug, Default, Deserialize)]
struct BraveResponse {
    #[serde(default)]
    web: BraveWeb,
}

#[derive(Debug, Default, Deserialize)]
struct BraveWeb {
    #[serde(default)]
    results: Vec<BraveResult>,
}

#[derive(Debug, Deserialize)]
struct BraveResult {
    #[serde(default)]
    title: String,
    url: String,
    #[serde(default)]
    description: String,
}

impl BraveResponse {
    fn into_results(self) -> Vec<SearchResult> {
        self.web
            .results
            .into_iter()
            .map(|r| SearchResult::new(r.title, r.url, r.description))
            .collect()
    }
}
