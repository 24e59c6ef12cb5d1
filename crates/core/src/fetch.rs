//! Page fetching from URLs, files, and stdin.
//!
//! [`PageSource`] is the seam the enrichment stage fetches through;
//! [`HttpFetcher`] is the production implementation. The file and stdin
//! helpers feed the extractor from the command line.

use std::fs;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;

use crate::{Result, SiftError};

/// User-Agent sent with every page request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; SearchBot/1.0)";

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 10, user_agent: DEFAULT_USER_AGENT.to_string() }
    }
}

/// Something that can retrieve the HTML of a page.
///
/// Implementations must be shareable across the tasks the enrichment stage
/// spawns.
pub trait PageSource: Send + Sync + 'static {
    /// Retrieve the page body for `url`.
    ///
    /// # Errors
    ///
    /// Any error marks the page as unavailable; callers never retry.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Fetches pages with a single bounded-timeout GET.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: u64,
}

impl HttpFetcher {
    /// Builds a fetcher with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`SiftError::HttpError`] if the TLS backend cannot be initialized.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(SiftError::HttpError)?;

        Ok(Self { client, timeout: config.timeout })
    }
}

impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let parsed_url = parse_page_url(url)?;

        let response = self.client.get(parsed_url).send().await.map_err(|e| {
            if e.is_timeout() {
                SiftError::Timeout { timeout: self.timeout }
            } else {
                SiftError::HttpError(e)
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SiftError::HttpStatus { status: status.as_u16(), url: url.to_string() });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                SiftError::Timeout { timeout: self.timeout }
            } else {
                SiftError::HttpError(e)
            }
        })
    }
}

/// Fetches HTML content from a URL with a one-off client.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    HttpFetcher::new(config)?.fetch(url).await
}

fn parse_page_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| SiftError::InvalidUrl(format!("{url}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(SiftError::InvalidUrl(format!("{url}: unsupported scheme {scheme}"))),
    }
}

/// Reads HTML content from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(SiftError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(SiftError::from)
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(SiftError::from)?;

    Ok(buffer)
}
