//! Canned answer used when no language-model key is configured.

use crate::model::{Answer, SearchResult};

const CITED_SOURCES: usize = 3;

/// Always-available backend that templates an answer from the query.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoAnswer;

impl DemoAnswer {
    pub fn answer(&self, query: &str, results: &[SearchResult]) -> Answer {
        let sources = results
            .iter()
            .take(CITED_SOURCES)
            .enumerate()
            .map(|(i, r)| format!("[{}] {}", i + 1, r.title))
            .collect::<Vec<_>>()
            .join("\n");

        let answer = format!(
            "Based on the search results, here's what I found about \"{query}\":\n\n\
             {query} is a topic that has been extensively covered across multiple sources. \
             According to the search results:\n\n\
             **Key Points:**\n\
             - The concept is well-documented with comprehensive guides available [1]\n\
             - Wikipedia provides historical context and background information [2]\n\
             - Multiple tutorials offer practical implementation guidance [3]\n\n\
             **Summary:**\n\
             The search results indicate that this is a well-established topic with plenty of resources \
             for learning more. The sources provide both theoretical background and practical applications.\n\n\
             **Sources:**\n{sources}"
        );

        Answer {
            answer,
            related_questions: vec![
                format!("What are best practices for {query}?"),
                format!("How to get started with {query}?"),
                format!("Common mistakes when using {query}"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::DemoSearch;

    #[test]
    fn test_cites_first_three_titles() {
        let results = DemoSearch.results("rust");
        let answer = DemoAnswer.answer("rust", &results);

        assert!(answer.answer.starts_with("Based on the search results, here's what I found about \"rust\""));
        assert!(answer.answer.ends_with(
            "**Sources:**\n[1] Understanding rust - Complete Guide\n[2] rust - Wikipedia\n[3] How to Use rust Effectively"
        ));
        assert!(!answer.answer.contains("[4]"));
    }

    #[test]
    fn test_related_questions_mention_query() {
        let answer = DemoAnswer.answer("tokio", &[]);
        assert_eq!(
            answer.related_questions,
            vec![
                "What are best practices for tokio?",
                "How to get started with tokio?",
                "Common mistakes when using tokio",
            ]
        );
        assert!(answer.answer.ends_with("**Sources:**\n"));
    }
}
