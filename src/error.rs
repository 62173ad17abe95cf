// src/error.rs
use thiserror::Error;

/// Error type for the whole document generation pipeline.
///
/// Layout itself never fails: missing or empty content renders as empty
/// strings, and oversized content is paginated or allowed to overflow by
/// policy. The fallible surface is the PDF writer boundary, file I/O in the
/// CLI, and JSON ingestion of the document.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF assembly failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document parsing failed: {0}")]
    Parse(#[from] serde_json::Error),
}
