//! # Content Classification
//!
//! Decides whether a blob of text should be rendered as markup or shown as
//! literal plain text. The user never declares a content type, so padmark
//! guesses from tag density: pasted HTML or angle-bracket-heavy code would be
//! mangled by a markdown renderer, and a high ratio of tag-like substrings to
//! lines is a strong signal for that case.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[A-Za-z][^>]*>").expect("tag pattern"));

/// A tag count above this fraction of the line count flips the content to
/// literal rendering.
const TAG_DENSITY_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Show literally: HTML-escaped, whitespace preserved.
    PlainText,
    /// Render through the markdown pipeline.
    Markup,
}

/// Classify a text blob. Empty text is Markup (renders as empty).
pub fn classify(text: &str) -> Classification {
    if text.is_empty() {
        return Classification::Markup;
    }

    let tags = TAG_PATTERN.find_iter(text).count();
    let lines = text.split('\n').count();

    if tags as f64 > TAG_DENSITY_THRESHOLD * lines as f64 {
        Classification::PlainText
    } else {
        Classification::Markup
    }
}
