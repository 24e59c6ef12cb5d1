//! Request, response, and record types shared by every stage.

use serde::{Deserialize, Serialize};

/// A single normalized web search result.
///
/// `content` stays `None` until enrichment succeeds for this item. Results are
/// identified by position, so two results with the same URL are independent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl SearchResult {
    /// Creates a result without extracted page content.
    pub fn new(title: impl Into<String>, url: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), url: url.into(), description: description.into(), content: None }
    }

    /// Text handed to the language model: the extracted page content when
    /// present, otherwise the search snippet.
    pub fn context_text(&self) -> &str {
        self.content.as_deref().unwrap_or(&self.description)
    }
}

/// Incoming search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Generated answer with suggested follow-up questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    #[serde(default)]
    pub related_questions: Vec<String>,
}

/// Complete response for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub answer: String,
    pub sources: Vec<SearchResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_questions: Vec<String>,
}
