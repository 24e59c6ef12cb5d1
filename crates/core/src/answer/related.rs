//! Follow-up question extraction from generated answers.

use std::sync::LazyLock;

use regex::Regex;

/// How many follow-up questions are returned.
pub const MAX_RELATED_QUESTIONS: usize = 3;

/// Returned when the answer contains no question lines.
pub const FALLBACK_QUESTIONS: [&str; MAX_RELATED_QUESTIONS] = [
    "What are the main benefits?",
    "How does this compare to alternatives?",
    "What are common use cases?",
];

static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:#{1,6}\s+|\d+[.)]\s*|[-*•+]\s+)").unwrap());

/// Pull the suggested follow-up questions out of a model answer.
///
/// Models are asked to close with three related questions, usually as a
/// numbered or bulleted list. The last [`MAX_RELATED_QUESTIONS`] lines that
/// end in `?` are returned in answer order, stripped of list markers and
/// emphasis. Answers without any question fall back to
/// [`FALLBACK_QUESTIONS`].
pub fn extract_related_questions(answer: &str) -> Vec<String> {
    let questions: Vec<String> = answer.lines().filter_map(question_line).collect();

    if questions.is_empty() {
        return FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect();
    }

    let skip = questions.len().saturating_sub(MAX_RELATED_QUESTIONS);
    questions.into_iter().skip(skip).collect()
}

fn question_line(line: &str) -> Option<String> {
    let line = LIST_MARKER.replace(line.trim(), "");
    let line = line.trim().trim_matches(|c| c == '*' || c == '_' || c == '"').trim();

    if line.len() > 1 && line.ends_with('?') { Some(line.to_string()) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_questions_at_end() {
        let answer = "Rust is a systems language [1].\n\n**Related questions:**\n\
                      1. How does Rust manage memory?\n\
                      2. What is the borrow checker?\n\
                      3. Is Rust good for web development?";

        assert_eq!(
            extract_related_questions(answer),
            vec![
                "How does Rust manage memory?",
                "What is the borrow checker?",
                "Is Rust good for web development?",
            ]
        );
    }

    #[test]
    fn test_bullets_and_emphasis_stripped() {
        let answer = "Answer body.\n\n- **Why use async?**\n* _What is a runtime?_\n• How do tasks get scheduled?";

        assert_eq!(
            extract_related_questions(answer),
            vec!["Why use async?", "What is a runtime?", "How do tasks get scheduled?"]
        );
    }

    #[test]
    fn test_only_last_three_kept() {
        let answer = "## What is Tokio?\nTokio is a runtime.\n1) Q one?\n2) Q two?\n3) Q three?";

        assert_eq!(extract_related_questions(answer), vec!["Q one?", "Q two?", "Q three?"]);
    }

    #[test]
    fn test_fewer_than_three_questions() {
        let answer = "Some text.\nWant to know more about lifetimes?";
        assert_eq!(extract_related_questions(answer), vec!["Want to know more about lifetimes?"]);
    }

    #[test]
    fn test_fallback_when_no_questions() {
        let questions = extract_related_questions("A plain answer with no follow ups.");
        assert_eq!(questions, FALLBACK_QUESTIONS.to_vec());
    }

    #[test]
    fn test_lone_question_mark_ignored() {
        let questions = extract_related_questions("Answer\n?\n-  ?");
        assert_eq!(questions, FALLBACK_QUESTIONS.to_vec());
    }
}
