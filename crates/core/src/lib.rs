pub mod answer;
pub mod config;
pub mod enrich;
pub mod error;
pub mod extract;
pub mod fetch;
mod http;
pub mod model;
pub mod parse;
pub mod pipeline;
pub mod preprocess;
pub mod search;

pub use answer::{AnswerBackend, AnswerService, PLACEHOLDER_ANSWER, extract_related_questions};
pub use config::{Config, ConfigBuilder};
pub use enrich::{EnrichConfig, Enricher};
pub use error::{Result, SiftError};
pub use extract::{ExtractConfig, extract_text, extract_text_with_config};
pub use fetch::{FetchConfig, HttpFetcher, PageSource};
pub use fetch::{fetch_file, fetch_stdin, fetch_url};
pub use model::{Answer, SearchRequest, SearchResponse, SearchResult};
pub use parse::Document;
pub use pipeline::Pipeline;
pub use preprocess::strip_boilerplate;
pub use search::{SearchBackend, SearchService};
