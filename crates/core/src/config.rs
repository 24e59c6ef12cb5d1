//! Process-wide configuration.
//!
//! A [`Config`] is built once at startup, from the environment or from any
//! key lookup, and handed to each service constructor. Nothing reads the
//! environment after that.
//!
//! # Example
//!
//! ```rust
//! use sift_core::Config;
//!
//! let config = Config::builder()
//!     .openai_api_key("sk-test")
//!     .max_concurrency(3)
//!     .fetch_timeout(5)
//!     .build();
//!
//! assert!(config.openai_api_key.is_some());
//! assert_eq!(config.enrich.max_concurrency, 3);
//! ```

use crate::enrich::EnrichConfig;
use crate::extract::ExtractConfig;
use crate::fetch::FetchConfig;
use crate::{Result, SiftError};

/// Brave Search subscription token.
pub const BRAVE_SEARCH_API_KEY: &str = "BRAVE_SEARCH_API_KEY";
/// SerpAPI key.
pub const SERPAPI_KEY: &str = "SERPAPI_KEY";
/// OpenAI API key.
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
/// Anthropic API key.
pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
/// Page fetch timeout override, in seconds.
pub const FETCH_TIMEOUT: &str = "SIFT_FETCH_TIMEOUT";
/// Enrichment concurrency override.
pub const MAX_CONCURRENCY: &str = "SIFT_MAX_CONCURRENCY";

/// Immutable configuration for every stage of the pipeline.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub brave_api_key: Option<String>,
    pub serpapi_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub fetch: FetchConfig,
    pub enrich: EnrichConfig,
    pub extract: ExtractConfig,
}

impl Config {
    /// Creates a new builder with default values and no credentials.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`SiftError::ConfigError`] when a numeric override is invalid.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    ///
    /// Blank values count as absent, so an empty `OPENAI_API_KEY=` falls
    /// through to the next answer backend.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mut builder = ConfigBuilder::new();
        builder.config.brave_api_key = value(BRAVE_SEARCH_API_KEY);
        builder.config.serpapi_key = value(SERPAPI_KEY);
        builder.config.openai_api_key = value(OPENAI_API_KEY);
        builder.config.anthropic_api_key = value(ANTHROPIC_API_KEY);

        if let Some(raw) = value(FETCH_TIMEOUT) {
            builder = builder.fetch_timeout(parse_positive(FETCH_TIMEOUT, &raw)?);
        }
        if let Some(raw) = value(MAX_CONCURRENCY) {
            builder = builder.max_concurrency(parse_positive(MAX_CONCURRENCY, &raw)?);
        }

        Ok(builder.build())
    }
}

fn parse_positive<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr + PartialEq + Default,
{
    match raw.parse::<T>() {
        Ok(value) if value != T::default() => Ok(value),
        _ => Err(SiftError::ConfigError(format!("{key} must be a positive integer, got {raw:?}"))),
    }
}

/// Builder for [`Config`].
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: Config::default() }
    }

    pub fn brave_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.brave_api_key = Some(key.into());
        self
    }

    pub fn serpapi_key(mut self, key: impl Into<String>) -> Self {
        self.config.serpapi_key = Some(key.into());
        self
    }

    pub fn openai_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.openai_api_key = Some(key.into());
        self
    }

    pub fn anthropic_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.anthropic_api_key = Some(key.into());
        self
    }

    /// Sets the per-page request timeout in seconds.
    pub fn fetch_timeout(mut self, seconds: u64) -> Self {
        self.config.fetch.timeout = seconds;
        self
    }

    /// Sets the User-Agent sent to result pages.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.fetch.user_agent = user_agent.into();
        self
    }

    /// Sets the enrichment concurrency cap.
    pub fn max_concurrency(mut self, value: usize) -> Self {
        self.config.enrich.max_concurrency = value;
        self
    }

    /// Sets the extraction limits.
    pub fn extract(mut self, extract: ExtractConfig) -> Self {
        self.config.extract = extract;
        self
    }

    /// Builds the final configuration.
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
