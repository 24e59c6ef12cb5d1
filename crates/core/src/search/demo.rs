//! Placeholder results used when no search credentials are configured.

use crate::model::SearchResult;

/// Always-available backend returning five canned results built from the query.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSearch;

impl DemoSearch {
    pub fn results(&self, query: &str) -> Vec<SearchResult> {
        vec![
            SearchResult::new(
                format!("Understanding {query} - Complete Guide"),
                "https://example.com/guide",
                format!("A comprehensive guide to understanding {query} with examples and best practices."),
            ),
            SearchResult::new(
                format!("{query} - Wikipedia"),
                "https://en.wikipedia.org/wiki/Example",
                format!("Wikipedia article about {query} covering history, applications, and more."),
            ),
            SearchResult::new(
                format!("How to Use {query} Effectively"),
                "https://example.com/tutorial",
                format!("Step-by-step tutorial on using {query} in real-world scenarios."),
            ),
            SearchResult::new(
                format!("{query} Best Practices 2024"),
                "https://example.com/best-practices",
                format!("Latest best practices and recommendations for {query}."),
            ),
            SearchResult::new(
                format!("Getting Started with {query}"),
                "https://example.com/getting-started",
                format!("Beginner-friendly introduction to {query}."),
            ),
        ]
    }
}
