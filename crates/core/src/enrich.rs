//! Concurrent page enrichment for search results.
//!
//! [`Enricher::enrich`] fetches every result's page in parallel under a
//! concurrency cap and stores the extracted text in `content`. Output order
//! always matches input order, and a page that cannot be fetched or yields
//! no text only leaves its own `content` empty.
//!
//! # Example
//!
//! ```rust,no_run
//! use sift_core::{Enricher, SearchResult};
//!
//! # async fn example() -> sift_core::Result<()> {
//! let enricher = Enricher::http(&Default::default(), Default::default(), Default::default())?;
//! let results = vec![SearchResult::new("Rust", "https://www.rust-lang.org", "Rust homepage")];
//! let enriched = enricher.enrich(results).await;
//! println!("{:?}", enriched[0].content);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::Instrument;

use crate::Result;
use crate::extract::{ExtractConfig, extract_text_with_config};
use crate::fetch::{FetchConfig, HttpFetcher, PageSource};
use crate::model::SearchResult;

/// Configuration for the enrichment stage.
#[derive(Debug, Clone)]
pub struct EnrichConfig {
    /// Upper bound on simultaneous fetch + extract operations.
    pub max_concurrency: usize,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self { max_concurrency: 5 }
    }
}

/// Fetches and extracts page content for a batch of results.
pub struct Enricher<S = HttpFetcher> {
    source: Arc<S>,
    extract: Arc<ExtractConfig>,
    config: EnrichConfig,
}

impl Enricher<HttpFetcher> {
    /// Builds an enricher that fetches pages over HTTP.
    pub fn http(fetch: &FetchConfig, extract: ExtractConfig, config: EnrichConfig) -> Result<Self> {
        Ok(Self::new(HttpFetcher::new(fetch)?, extract, config))
    }
}

impl<S: PageSource> Enricher<S> {
    pub fn new(source: S, extract: ExtractConfig, config: EnrichConfig) -> Self {
        Self { source: Arc::new(source), extract: Arc::new(extract), config }
    }

    /// Number of units allowed in flight for a batch of `len` results.
    pub fn concurrency_for(&self, len: usize) -> usize {
        self.config.max_concurrency.max(1).min(len)
    }

    /// Populate `content` for every result whose page yields text.
    ///
    /// Spawns one task per result and waits for all of them. Each task holds
    /// a permit from a semaphore sized by [`Enricher::concurrency_for`] while
    /// it fetches and extracts; the permit is released when the task ends,
    /// whatever the outcome.
    pub async fn enrich(&self, mut results: Vec<SearchResult>) -> Vec<SearchResult> {
        if results.is_empty() {
            return results;
        }

        let gate = Arc::new(Semaphore::new(self.concurrency_for(results.len())));

        let handles: Vec<_> = results
            .iter()
            .enumerate()
            .map(|(index, result)| {
                let task = EnrichmentTask { index, url: result.url.clone() };
                let source = Arc::clone(&self.source);
                let extract = Arc::clone(&self.extract);
                let gate = Arc::clone(&gate);
                let span = tracing::debug_span!("enrich", index, url = %task.url);

                tokio::spawn(async move { task.run(source.as_ref(), &extract, &gate).await }.instrument(span))
            })
            .collect();

        let mut enriched = 0usize;
        for (index, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(Some(content)) => {
                    results[index].content = Some(content);
                    enriched += 1;
                }
                Ok(None) => {}
                Err(err) => tracing::warn!(index, error = %err, "enrichment task did not complete"),
            }
        }

        tracing::debug!(total = results.len(), enriched, "enrichment finished");
        results
    }
}

/// One unit of enrichment work, addressed by its position in the input.
struct EnrichmentTask {
    index: usize,
    url: String,
}

impl EnrichmentTask {
    async fn run<S: PageSource>(self, source: &S, extract: &ExtractConfig, gate: &Semaphore) -> Option<String> {
        let Ok(_permit) = gate.acquire().await else {
            tracing::debug!(index = self.index, "admission gate closed");
            return None;
        };

        let body = match source.fetch(&self.url).await {
            Ok(body) => body,
            Err(err) => {
                tracing::debug!(index = self.index, error = %err, "page unavailable");
                return None;
            }
        };

        let text = extract_text_with_config(&body, extract);
        if text.is_empty() { None } else { Some(text) }
    }
}
