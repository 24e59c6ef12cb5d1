//! Anthropic Messages API backend.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::prompt::{SYSTEM_PROMPT, build_user_prompt};
use crate::http::{provider_client, read_json};
use crate::model::SearchResult;
use crate::{Result, SiftError};

const NAME: &str = "Anthropic";

/// Default API root.
pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
pub const ANTHROPIC_MODEL: &str = "claude-3-haiku-20240307";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Sends the prompt to `POST /v1/messages`.
#[derive(Clone)]
pub struct AnthropicAnswer {
    api_key: Option<String>,
    base_url: String,
    model: String,
    client: Client,
}

impl std::fmt::Debug for AnthropicAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicAnswer")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("has_key", &self.api_key.is_some())
            .finish()
    }
}

impl AnthropicAnswer {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: ANTHROPIC_BASE_URL.to_string(),
            model: ANTHROPIC_MODEL.to_string(),
            client: provider_client(),
        }
    }

    /// Point the backend at another API root, e.g. a local mock server.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    fn request_body(&self, query: &str, results: &[SearchResult]) -> serde_json::Value {
        json!({
            "model": self.model,
            "max_tokens": 1000,
            "system": SYSTEM_PROMPT,
            "messages": [
                {"role": "user", "content": build_user_prompt(query, results)},
            ],
        })
    }

    /// Returns the text of the first content block.
    pub async fn complete(&self, query: &str, results: &[SearchResult]) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SiftError::ConfigError("Anthropic API key is not set".into()))?;

        let url = format!("{}/v1/messages", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&self.request_body(query, results))
            .send()
            .await?;

        let body: MessageResponse = read_json(response, NAME).await?;
        body.content
            .into_iter()
            .find_map(|block| block.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| SiftError::provider(NAME, "no response from Anthropic"))
    }
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}
