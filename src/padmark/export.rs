//! # Export
//!
//! Builds export payloads for the host's download/print sink. Text and
//! markdown exports carry the raw note; PDF and HTML exports go through the
//! classifier and renderer to produce a styled, self-contained document. An
//! already-complete HTML document is passed through verbatim.

use crate::render;
use chrono::{DateTime, Utc};

/// Inlined stylesheet for generated documents, so exports render the same
/// everywhere without external assets.
const EXPORT_STYLE: &str = "\
body { max-width: 46em; margin: 2em auto; padding: 0 1em; \
font-family: -apple-system, 'Segoe UI', sans-serif; line-height: 1.6; }\n\
pre.plain-text { white-space: pre-wrap; font-family: ui-monospace, monospace; }\n\
@media print { body { margin: 0; max-width: none; } }";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Txt,
    Md,
    Pdf,
    Html,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Md => "md",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Txt => "text/plain",
            ExportFormat::Md => "text/markdown",
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Html => "text/html",
        }
    }
}

/// Capability to deliver an export: a file download, or a print dialog for
/// the PDF path.
pub trait ExportSink {
    fn download(&mut self, filename: &str, mime: &str, content: &str) -> crate::error::Result<()>;
    fn print(&mut self, html: &str) -> crate::error::Result<()>;
}

/// Dated default filename, e.g. `note-2026-08-29.md`.
pub fn export_filename(format: ExportFormat, now: DateTime<Utc>) -> String {
    format!("note-{}.{}", now.format("%Y-%m-%d"), format.extension())
}

/// Build the HTML document used for the PDF and HTML paths. Content that is
/// already a complete document is returned verbatim.
pub fn build_document(text: &str) -> String {
    if render::is_complete_html_document(text) {
        return text.to_string();
    }

    let body = render::render(text);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Note</title>\n<style>\n{}\n</style>\n</head>\n\
         <body>\n{}\n</body>\n</html>\n",
        EXPORT_STYLE, body
    )
}
