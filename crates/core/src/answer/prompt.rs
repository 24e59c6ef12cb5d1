//! Prompt construction shared by every language-model backend.

use crate::model::SearchResult;

/// Only the highest-ranked sources are sent to the model.
pub const MAX_CONTEXT_SOURCES: usize = 5;

pub const SYSTEM_PROMPT: &str = "You are a helpful AI search assistant. Based on the provided search results, give a comprehensive, accurate answer to the user's query.
- Cite sources using [1], [2], etc. format
- Be concise but thorough
- If information is uncertain, say so
- At the end, suggest 3 related questions the user might want to explore";

/// Numbered source blocks for the first [`MAX_CONTEXT_SOURCES`] results.
///
/// Each block carries the URL, the title and the extracted page text, or the
/// search snippet when the page could not be enriched.
pub fn build_context(results: &[SearchResult]) -> String {
    results
        .iter()
        .take(MAX_CONTEXT_SOURCES)
        .enumerate()
        .map(|(i, r)| format!("Source {} ({}):\nTitle: {}\nContent: {}\n", i + 1, r.url, r.title, r.context_text()))
        .collect::<Vec<_>>()
        .join("\n---\n")
}

pub fn build_user_prompt(query: &str, results: &[SearchResult]) -> String {
    format!(
        "Query: {query}\n\nSearch Results:\n{}\n\nProvide a helpful answer based on these sources.",
        build_context(results)
    )
}
