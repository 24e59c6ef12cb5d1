//! Readable text extraction from arbitrary HTML pages.
//!
//! The extractor strips boilerplate, looks for the article body through a
//! fixed priority list of selectors, and returns whitespace-normalized text
//! capped at a fixed length.

use crate::parse::{Document, Element};
use crate::preprocess::strip_boilerplate;

/// Selectors tried in order when looking for the article body.
pub const DEFAULT_SELECTORS: &[&str] = &[
    "article",
    "main",
    ".content",
    ".post-content",
    ".article-content",
    "#content",
    ".entry-content",
];

/// Marker appended to truncated text.
pub const TRUNCATION_MARKER: &str = "...";

/// Configuration for content extraction
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// A selector's text is accepted only when it is longer than this many characters
    pub min_chars: usize,
    /// Maximum characters returned before the truncation marker
    pub max_chars: usize,
    /// Body-like selectors, highest priority first
    pub selectors: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_chars: 200,
            max_chars: 2000,
            selectors: DEFAULT_SELECTORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Extract readable text from an HTML document with the default configuration.
///
/// # Example
///
/// ```rust
/// use sift_core::extract_text;
///
/// let html = "<html><body><nav>Menu</nav><p>Hello\n   world</p></body></html>";
/// assert_eq!(extract_text(html), "Hello world");
/// ```
pub fn extract_text(html: &str) -> String {
    extract_text_with_config(html, &ExtractConfig::default())
}

/// Extract readable text from an HTML document.
///
/// Always returns a string, possibly empty. Malformed markup is recovered by
/// the parser rather than reported.
pub fn extract_text_with_config(html: &str, config: &ExtractConfig) -> String {
    let cleaned = strip_boilerplate(html);
    let doc = Document::parse(&cleaned);

    let text = select_main_text(&doc, config).unwrap_or_else(|| document_text(&doc));

    truncate_chars(&text, config.max_chars)
}

/// Walk the selector list and return the first sufficiently long text.
fn select_main_text(doc: &Document, config: &ExtractConfig) -> Option<String> {
    for selector in &config.selectors {
        let elements = match doc.select(selector) {
            Ok(elements) => elements,
            Err(err) => {
                tracing::debug!(%selector, error = %err, "skipping content selector");
                continue;
            }
        };

        if elements.is_empty() {
            continue;
        }

        let text = normalize_whitespace(&joined_text(&elements));
        if text.chars().count() > config.min_chars {
            return Some(text);
        }
    }

    None
}

/// Text of the whole body, or of the whole document when there is no body.
fn document_text(doc: &Document) -> String {
    let raw = match doc.body() {
        Some(body) => body.text(),
        None => doc.text_content(),
    };
    normalize_whitespace(&raw)
}

fn joined_text(elements: &[Element<'_>]) -> String {
    elements.iter().map(Element::text).collect::<Vec<_>>().join("\n")
}

/// Trim every line, drop empty ones, and join the rest with single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cut text to `max_chars` characters, appending [`TRUNCATION_MARKER`] when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}{}", &text[..end], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn long_text(word: &str, words: usize) -> String {
        vec![word; words].join(" ")
    }

    #[test]
    fn test_article_kept_and_script_dropped() {
        let article = long_text("ownership", 40);
        let html = format!(
            "<html><head><script>trackVisitor('secret');</script></head>
             <body><article><p>{article}</p></article><script>console.log('inline')</script></body></html>"
        );

        let text = extract_text(&html);
        assert!(text.contains(&article));
        assert!(!text.contains("trackVisitor"));
        assert!(!text.contains("console.log"));
    }

    #[test]
    fn test_long_article_truncated_to_limit() {
        let html = format!("<article>{}</article>", "a".repeat(5000));
        let text = extract_text(&html);

        assert_eq!(text.chars().count(), 2000 + TRUNCATION_MARKER.len());
        assert!(text.ends_with(TRUNCATION_MARKER));
        assert_eq!(&text[..2000], "a".repeat(2000));
    }

    #[test]
    fn test_exact_limit_not_marked() {
        let html = format!("<article>{}</article>", "b".repeat(2000));
        let text = extract_text(&html);

        assert_eq!(text.len(), 2000);
        assert!(!text.ends_with(TRUNCATION_MARKER));
    }

    #[rstest]
    #[case::article_first("article", "<article>{long}</article><main>{long_other}</main>")]
    #[case::main("main", "<div>noise</div><main>{long}</main>")]
    #[case::content_class(".content", "<div class=\"content\">{long}</div>")]
    #[case::post_content(".post-content", "<div class=\"post-content\">{long}</div>")]
    #[case::article_content(".article-content", "<section class=\"article-content\">{long}</section>")]
    #[case::content_id("#content", "<div id=\"content\">{long}</div>")]
    #[case::entry_content(".entry-content", "<div class=\"entry-content\">{long}</div>")]
    fn test_selector_priority(#[case] _selector: &str, #[case] template: &str) {
        let long = long_text("primary", 40);
        let long_other = long_text("secondary", 40);
        let html = format!(
            "<html><body><p>Sidebar teaser outside the body container</p>{}</body></html>",
            template.replace("{long}", &long).replace("{long_other}", &long_other)
        );

        let text = extract_text(&html);
        assert!(text.starts_with("primary"));
        assert!(!text.contains("secondary"));
        assert!(!text.contains("Sidebar teaser"));
    }

    #[test]
    fn test_short_selector_falls_through_to_next() {
        let body = long_text("detailed", 40);
        let html = format!(
            "<body><article>Too short</article><div class=\"entry-content\">{body}</div><p>Outside</p></body>"
        );

        let text = extract_text(&html);
        assert_eq!(text, body);
    }

    #[test]
    fn test_short_everywhere_falls_back_to_body() {
        let html = "<body>\n<p>Intro line</p>\n<main>Short main</main>\n<p>Closing line</p>\n</body>";
        let text = extract_text(html);

        assert_eq!(text, "Intro line Short main Closing line");
    }

    #[test]
    fn test_all_matches_of_selector_are_joined() {
        let first = long_text("first", 30);
        let second = long_text("second", 30);
        let html = format!("<article>{first}</article><article>{second}</article>");

        let text = extract_text(&html);
        assert_eq!(text, format!("{first} {second}"));
    }

    #[test]
    fn test_chrome_inside_article_removed() {
        let body = long_text("paragraph", 40);
        let html = format!(
            "<article><header>Byline header</header><p>{body}</p><aside>Pull quote</aside><footer>Tags</footer></article>"
        );

        let text = extract_text(&html);
        assert_eq!(text, body);
    }

    #[test]
    fn test_whitespace_normalized() {
        let html = "<body>\n\n   <p>First line</p>\n\t\n   <p>  Second line  </p>\n\n\n</body>";
        assert_eq!(extract_text(html), "First line Second line");
    }

    #[rstest]
    #[case::empty("")]
    #[case::only_scripts("<html><head><style>b{}</style></head><body><script>x()</script></body></html>")]
    #[case::whitespace("<html><body>   \n\n   </body></html>")]
    fn test_no_text_yields_empty_string(#[case] html: &str) {
        assert_eq!(extract_text(html), "");
    }

    #[test]
    fn test_malformed_markup_does_not_fail() {
        let html = "<html><body><article><p>Unclosed <b>bold <i>nested</article></div></span>trailing";
        let text = extract_text(html);
        assert!(text.contains("Unclosed"));
        assert!(text.contains("nested"));
    }

    #[test]
    fn test_ambiguous_markup_still_strips_scripts() {
        let html = "<html><body><p>visible</p><select><style>x</style></select><script>SECRET()</script></body></html>";
        assert_eq!(extract_text(html), "visible");
    }

    #[test]
    fn test_deterministic() {
        let html = format!("<main>{}</main><p>tail</p>", long_text("same", 80));
        assert_eq!(extract_text(&html), extract_text(&html));
    }

    #[test]
    fn test_custom_limits() {
        let config = ExtractConfig { min_chars: 5, max_chars: 10, ..Default::default() };
        let html = "<body><main>Main content wins</main><p>ignored</p></body>";

        assert_eq!(extract_text_with_config(html, &config), "Main conte...");
    }

    #[test]
    fn test_invalid_custom_selector_is_skipped() {
        let config = ExtractConfig {
            min_chars: 3,
            selectors: vec!["[[broken".to_string(), "main".to_string()],
            ..Default::default()
        };
        let html = "<body><p>outer</p><main>inner text</main></body>";

        assert_eq!(extract_text_with_config(html, &config), "inner text");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "é".repeat(10);
        let truncated = truncate_chars(&text, 4);
        assert_eq!(truncated, format!("{}{}", "é".repeat(4), TRUNCATION_MARKER));
    }

    #[test]
    fn test_normalize_whitespace_handles_crlf() {
        assert_eq!(normalize_whitespace("  one\r\n\r\n two  \r\nthree"), "one two three");
    }
}
