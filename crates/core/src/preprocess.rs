//! Streaming removal of markup that never carries article prose.
//!
//! Runs before DOM parsing so that page chrome (navigation, headers, footers,
//! sidebars) and non-text payloads (scripts, styles, embeds) cannot leak into
//! the extracted text, whichever container ends up selected.

macro_rules! remove_element {
    ($selector:literal) => {
        lol_html::element!($selector, |el| {
            el.remove();
            Ok(())
        })
    };
}

/// Remove boilerplate elements and their content from an HTML document.
///
/// Removed: `script`, `style`, `nav`, `footer`, `header`, `aside`,
/// `noscript`, `iframe`, `svg` and `template`.
///
/// The rewriter is tolerant of broken markup. If it still rejects the input,
/// the original document is returned untouched and the HTML parser gets to
/// recover what it can.
pub fn strip_boilerplate(html: &str) -> String {
    let mut output = Vec::with_capacity(html.len());
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings {
            element_content_handlers: vec![
                remove_element!("script"),
                remove_element!("style"),
                remove_element!("nav"),
                remove_element!("footer"),
                remove_element!("header"),
                remove_element!("aside"),
                remove_element!("noscript"),
                remove_element!("iframe"),
                remove_element!("svg"),
                remove_element!("template"),
            ],
            // Strict mode aborts on ambiguous markup such as `<select><style>`,
            // which would skip every removal at once.
            strict: false,
            ..Default::default()
        },
        |c: &[u8]| {
            output.extend_from_slice(c);
        },
    );

    if let Err(err) = rewriter.write(html.as_bytes()) {
        tracing::debug!(error = %err, "boilerplate rewrite failed; using original markup");
        return html.to_string();
    }

    if let Err(err) = rewriter.end() {
        tracing::debug!(error = %err, "boilerplate rewrite failed; using original markup");
        return html.to_string();
    }

    match String::from_utf8(output) {
        Ok(cleaned) => cleaned,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
