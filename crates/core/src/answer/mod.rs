//! Answer synthesis over enriched search results.
//!
//! Like search, answer generation walks a fixed chain (OpenAI, Anthropic,
//! demo) and uses the first backend with credentials. A failing provider is
//! reported to the caller, which substitutes [`PLACEHOLDER_ANSWER`].

mod anthropic;
mod demo;
mod openai;
mod prompt;
mod related;

pub use anthropic::{ANTHROPIC_BASE_URL, ANTHROPIC_MODEL, AnthropicAnswer};
pub use demo::DemoAnswer;
pub use openai::{OPENAI_BASE_URL, OPENAI_MODEL, OpenAiAnswer};
pub use prompt::{MAX_CONTEXT_SOURCES, SYSTEM_PROMPT, build_context, build_user_prompt};
pub use related::{FALLBACK_QUESTIONS, MAX_RELATED_QUESTIONS, extract_related_questions};

use crate::config::Config;
use crate::model::{Answer, SearchResult};
use crate::{Result, SiftError};

/// Answer text returned when the selected provider fails.
pub const PLACEHOLDER_ANSWER: &str = "Unable to generate AI summary at this time.";

impl Answer {
    /// The degraded answer: placeholder text and no follow-up questions.
    pub fn placeholder() -> Self {
        Self { answer: PLACEHOLDER_ANSWER.to_string(), related_questions: Vec::new() }
    }
}

/// One candidate in the answer fallback chain.
#[derive(Debug, Clone)]
pub enum AnswerBackend {
    OpenAi(OpenAiAnswer),
    Anthropic(AnthropicAnswer),
    Demo(DemoAnswer),
}

impl AnswerBackend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenAi(_) => "openai",
            Self::Anthropic(_) => "anthropic",
            Self::Demo(_) => "demo",
        }
    }

    pub fn is_available(&self) -> bool {
        match self {
            Self::OpenAi(backend) => backend.is_available(),
            Self::Anthropic(backend) => backend.is_available(),
            Self::Demo(_) => true,
        }
    }

    pub async fn generate(&self, query: &str, results: &[SearchResult]) -> Result<Answer> {
        let text = match self {
            Self::OpenAi(backend) => backend.complete(query, results).await?,
            Self::Anthropic(backend) => backend.complete(query, results).await?,
            Self::Demo(backend) => return Ok(backend.answer(query, results)),
        };

        let related_questions = extract_related_questions(&text);
        Ok(Answer { answer: text, related_questions })
    }
}

/// Generates answers with the first available backend.
#[derive(Debug, Clone)]
pub struct AnswerService {
    backends: Vec<AnswerBackend>,
}

impl AnswerService {
    pub fn new(backends: Vec<AnswerBackend>) -> Self {
        Self { backends }
    }

    /// OpenAI, then Anthropic, then demo, keyed by the configured credentials.
    pub fn from_config(config: &Config) -> Self {
        Self::new(vec![
            AnswerBackend::OpenAi(OpenAiAnswer::new(config.openai_api_key.clone())),
            AnswerBackend::Anthropic(AnthropicAnswer::new(config.anthropic_api_key.clone())),
            AnswerBackend::Demo(DemoAnswer),
        ])
    }

    pub fn active_backend(&self) -> Option<&AnswerBackend> {
        self.backends.iter().find(|backend| backend.is_available())
    }

    /// # Errors
    ///
    /// Propagates the selected provider's error, or [`SiftError::NoBackend`]
    /// when nothing in the chain is available.
    pub async fn generate(&self, query: &str, results: &[SearchResult]) -> Result<Answer> {
        let backend = self.active_backend().ok_or(SiftError::NoBackend { role: "answer" })?;
        tracing::debug!(backend = backend.name(), sources = results.len(), "generating answer");

        backend.generate(query, results).await.inspect_err(|err| {
            tracing::warn!(backend = backend.name(), error = %err, "answer generation failed");
        })
    }
}
