//! OpenAI Chat Completions backend.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::prompt::{SYSTEM_PROMPT, build_user_prompt};
use crate::http::{provider_client, read_json};
use crate::model::SearchResult;
use crate::{Result, SiftError};

const NAME: &str = "OpenAI";

/// Default API root.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const OPENAI_MODEL: &str = "gpt-4o-mini";

/// Sends the prompt to `POST /v1/chat/completions`.
#[derive(Clone)]
pub struct OpenAiAnswer {
    api_key: Option<String>,
    base_url: String,
    model: String,
    client: Client,
}

impl std::fmt::Debug for OpenAiAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiAnswer")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("has_key", &self.api_key.is_some())
            .finish()
    }
}

impl OpenAiAnswer {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: OPENAI_BASE_URL.to_string(),
            model: OPENAI_MODEL.to_string(),
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
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": build_user_prompt(query, results)},
            ],
            "temperature": 0.7,
            "max_tokens": 1000,
        })
    }

    /// Returns the raw answer text of the first choice.
    pub async fn complete(&self, query: &str, results: &[SearchResult]) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SiftError::ConfigError("OpenAI API key is not set".into()))?;

        let url = format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&self.request_body(query, results))
            .send()
            .await?;

        let body: ChatCompletion = read_json(response, NAME).await?;
        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| SiftError::provider(NAME, "no response from OpenAI"))
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}
