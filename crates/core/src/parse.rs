//! HTML parsing and DOM queries.
//!
//! This module provides the [`Document`] and [`Element`] types, thin wrappers
//! over `scraper` that the content extractor uses to query candidate regions
//! with CSS selectors.
//!
//! # Example
//!
//! ```rust
//! use sift_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p class="content">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! let paragraphs = doc.select("p.content").unwrap();
//! assert_eq!(paragraphs.len(), 1);
//! ```

use scraper::{ElementRef, Html, Node, Selector};

use crate::{Result, SiftError};

/// Represents a parsed HTML document.
///
/// Parsing never fails: html5ever recovers from malformed markup the same
/// way browsers do.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses an HTML document.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`SiftError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sift_core::parse::Document;
    ///
    /// let html = r#"<p class="content">First</p><p class="content">Second</p>"#;
    /// let doc = Document::parse(html);
    /// let elements = doc.select("p.content").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| SiftError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Gets the `<body>` element.
    ///
    /// html5ever synthesizes a body for fragments, so this is `None` only for
    /// frameset documents.
    pub fn body(&'_ self) -> Option<Element<'_>> {
        let selector = Selector::parse("body").ok()?;
        self.html.select(&selector).next().map(|el| Element { element: el })
    }

    /// Gets the title of the document.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    /// Gets all visible text content from the document.
    pub fn text_content(&self) -> String {
        visible_text(self.html.root_element())
    }
}

/// A wrapper around scraper's ElementRef.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element,
    /// skipping the bodies of `script`, `style` and `noscript`.
    pub fn text(&self) -> String {
        visible_text(self.element)
    }

    /// Gets the tag name of this element.
    ///
    /// Returns the lowercase tag name (e.g., "div", "a", "span").
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }
}

const NON_TEXT_TAGS: [&str; 3] = ["script", "style", "noscript"];

fn visible_text(element: ElementRef<'_>) -> String {
    element
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => {
                let hidden = node
                    .parent()
                    .and_then(|parent| parent.value().as_element().map(|el| NON_TEXT_TAGS.contains(&el.name())))
                    .unwrap_or(false);
                if hidden { None } else { Some(&**text) }
            }
            _ => None,
        })
        .collect()
}
