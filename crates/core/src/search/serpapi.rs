//! SerpAPI (Google results) backend.

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::http::{provider_client, read_json};
use crate::model::SearchResult;
use crate::{Result, SiftError};

const NAME: &str = "SerpAPI";

/// Default API root.
pub const SERPAPI_BASE_URL: &str = "https://serpapi.com";

/// Queries `GET /search.json`. The key travels in the query string, so
/// transport errors are stripped of their URL before they are reported.
#[derive(Clone)]
pub struct SerpApiSearch {
    api_key: Option<String>,
    base_url: String,
    client: Client,
}

impl std::fmt::Debug for SerpApiSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerpApiSearch")
            .field("base_url", &self.base_url)
            .field("has_key", &self.api_key.is_some())
            .finish()
    }
}

impl SerpApiSearch {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key, base_url: SERPAPI_BASE_URL.to_string(), client: provider_client() }
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
            .ok_or_else(|| SiftError::ConfigError("SerpAPI key is not set".into()))?;

        let endpoint = format!("{}/search.json", self.base_url.trim_end_matches('/'));
        let url = Url::parse_with_params(&endpoint, &[("q", query), ("api_key", api_key), ("num", "10")])
            .map_err(|e| SiftError::InvalidUrl(format!("{endpoint}: {e}")))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SiftError::HttpError(e.without_url()))?;

        let body: SerpApiResponse = read_json(response, NAME).await?;
        Ok(body.into_results())
    }
}

#[derive(Debug, Default, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    link: String,
    #[serde(default)]
    snippet: String,
}

impl SerpApiResponse {
    fn into_results(self) -> Vec<SearchResult> {
        self.organic_results
            .into_iter()
            .map(|r| SearchResult::new(r.title, r.link, r.snippet))
            .collect()
    }
}
