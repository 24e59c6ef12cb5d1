//! Error types for Sift operations.
//!
//! This module defines the main error type [`SiftError`] which represents
//! everything that can go wrong while searching, fetching pages, and
//! generating answers.
//!
//! Most of these never reach the caller of the pipeline: page failures are
//! absorbed by the enrichment stage and answer failures are replaced by a
//! placeholder. Only invalid queries and search failures surface.
//!
//! # Example
//!
//! ```rust
//! use sift_core::{SiftError, Result};
//!
//! fn require_query(query: &str) -> Result<&str> {
//!     if query.trim().is_empty() {
//!         return Err(SiftError::InvalidQuery);
//!     }
//!     Ok(query.trim())
//! }
//! # assert!(require_query("  ").is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for search, fetch, and answer operations.
#[derive(Error, Debug)]
pub enum SiftError {
    /// HTTP transport errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and response body decoding problems.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// A page answered with something other than `200 OK`.
    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or does not use http(s).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML rewriting or selector errors.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// A search or language-model backend returned an unusable response.
    #[error("{provider} error: {message}")]
    Provider { provider: &'static str, message: String },

    /// No backend in a fallback chain is available.
    #[error("No {role} backend is available")]
    NoBackend { role: &'static str },

    /// The query was missing or blank.
    #[error("Invalid request: query is required")]
    InvalidQuery,

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O errors while reading local input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration values.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SiftError {
    pub(crate) fn provider(provider: &'static str, message: impl Into<String>) -> Self {
        SiftError::Provider { provider, message: message.into() }
    }
}

/// Result type alias for SiftError.
pub type Result<T> = std::result::Result<T, SiftError>;
