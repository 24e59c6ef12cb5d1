//! The query pipeline: search, enrich, answer.
//!
//! # Example
//!
//! ```rust,no_run
//! use sift_core::{Config, Pipeline};
//!
//! # async fn example() -> sift_core::Result<()> {
//! let pipeline = Pipeline::from_config(&Config::from_env()?)?;
//! let response = pipeline.run("what is rust").await?;
//! println!("{}", response.answer);
//! # Ok(())
//! # }
//! ```

use tracing::Instrument;

use crate::answer::AnswerService;
use crate::config::Config;
use crate::enrich::Enricher;
use crate::fetch::{HttpFetcher, PageSource};
use crate::model::{Answer, SearchResponse};
use crate::search::SearchService;
use crate::{Result, SiftError};

/// Runs one query end to end.
///
/// Search failures fail the query. Enrichment never does. Answer failures
/// degrade to [`Answer::placeholder`] so the sources still reach the caller.
pub struct Pipeline<S = HttpFetcher> {
    search: SearchService,
    enricher: Enricher<S>,
    answer: AnswerService,
    enrich_sources: bool,
}

impl Pipeline<HttpFetcher> {
    /// Wires every stage from a single configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the page fetch client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let enricher = Enricher::http(&config.fetch, config.extract.clone(), config.enrich.clone())?;
        Ok(Self::new(SearchService::from_config(config), enricher, AnswerService::from_config(config)))
    }
}

impl<S: PageSource> Pipeline<S> {
    pub fn new(search: SearchService, enricher: Enricher<S>, answer: AnswerService) -> Self {
        Self { search, enricher, answer, enrich_sources: true }
    }

    /// Skip page fetching; answers are built from search snippets only.
    pub fn without_enrichment(mut self) -> Self {
        self.enrich_sources = false;
        self
    }

    pub fn search_service(&self) -> &SearchService {
        &self.search
    }

    pub fn answer_service(&self) -> &AnswerService {
        &self.answer
    }

    /// # Errors
    ///
    /// [`SiftError::InvalidQuery`] for a blank query, or the search backend's
    /// error when no results could be obtained.
    pub async fn run(&self, query: &str) -> Result<SearchResponse> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SiftError::InvalidQuery);
        }

        let span = tracing::info_span!("query", query);
        async move {
            let results = self.search.search(query).await?;

            let sources = if self.enrich_sources { self.enricher.enrich(results).await } else { results };
            let enriched = sources.iter().filter(|r| r.content.is_some()).count();
            tracing::debug!(sources = sources.len(), enriched, "sources ready");

            let answer = match self.answer.generate(query, &sources).await {
                Ok(answer) => answer,
                Err(err) => {
                    tracing::warn!(error = %err, "falling back to placeholder answer");
                    Answer::placeholder()
                }
            };

            Ok(SearchResponse {
                query: query.to_string(),
                answer: answer.answer,
                sources,
                related_questions: answer.related_questions,
            })
        }
        .instrument(span)
        .await
    }
}
