//! # Rendering
//!
//! Turns note text into preview HTML. Markdown goes through pulldown-cmark in
//! a defensive mode: raw HTML events are re-emitted as text so embedded
//! fragments arrive escaped instead of interpreted. Plain text is escaped and
//! wrapped in a whitespace-preserving block.

use crate::classify::{classify, Classification};
use pulldown_cmark::{html, Event, Options, Parser};

/// Render note text for the preview surface, dispatching on classification.
pub fn render(text: &str) -> String {
    match classify(text) {
        Classification::Markup => render_markup(text),
        Classification::PlainText => render_plain(text),
    }
}

/// Render markdown to HTML. Embedded raw HTML is escaped, never interpreted.
pub fn render_markup(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        // Downgrade raw HTML to text; push_html escapes text events.
        Event::Html(raw) => Event::Text(raw),
        Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Render literal text: HTML-escaped, whitespace preserved.
pub fn render_plain(text: &str) -> String {
    format!("<pre class=\"plain-text\">{}</pre>", escape_html(text))
}

/// Minimal HTML escaping for text interpolated into markup.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// True when the content is already a complete HTML document, detected by a
/// case-insensitive `<!DOCTYPE html` prefix (leading whitespace ignored).
pub fn is_complete_html_document(text: &str) -> bool {
    const PREFIX: &str = "<!doctype html";
    let head = text.trim_start();
    head.get(..PREFIX.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(PREFIX))
}
