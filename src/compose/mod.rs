// src/compose/mod.rs
//! Document assembly: resolve the template, run the section renderers over
//! a fresh cursor, hand the finished pages to the PDF writer.

pub mod letter;
pub mod resume;

use crate::document::Document;
use crate::error::RenderError;
use crate::layout::cursor::LayoutCursor;
use crate::layout::page::Page;
use crate::render::pdf::PdfWriter;
use crate::style::StyleConfig;
use crate::themes;
use log::info;

/// Lays out `document` under `template_id` without serializing, returning
/// the positioned pages. The on-screen preview and the draw-command tests
/// consume this; [`render_document`] feeds it to the writer.
pub fn layout_document(document: &Document, template_id: &str) -> (Vec<Page>, StyleConfig) {
    let style = themes::resolve(document, template_id);
    let mut cursor = LayoutCursor::new(&style);
    match document {
        Document::Resume(resume) => resume::compose(resume, &mut cursor, &style),
        Document::CoverLetter(letter) => letter::compose(letter, &mut cursor, &style),
    }
    let pages = cursor.into_pages();
    info!(
        "laid out {} page(s) for template '{}'",
        pages.len(),
        template_id
    );
    (pages, style)
}

/// Renders `document` to PDF bytes. The only fallible step is the writer
/// boundary; layout degrades instead of failing.
pub fn render_document(document: &Document, template_id: &str) -> Result<Vec<u8>, RenderError> {
    let (pages, style) = layout_document(document, template_id);
    PdfWriter::new(document.title()).write(&pages, &style)
}

/// Prefixes `https://` when the value carries no scheme. Chip contents are
/// user-typed ("example.com/jane"), not guaranteed to be full URIs.
pub(crate) fn ensure_scheme(raw: &str) -> String {
    if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

/// Splits a body block into blank-line-separated paragraphs. Single
/// newlines stay inside their paragraph (the wrapper honors them as forced
/// breaks).
pub(crate) fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }
    paragraphs
}
