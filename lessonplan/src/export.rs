//! Export collaborators
//!
//! The download step talks to two renderer seams instead of reaching for
//! library globals: [`BlockRenderer`] turns the parsed block sequence into a
//! structured document (Word), and [`SnapshotRenderer`] turns a captured
//! preview bitmap into a paged image document (PDF). Both are injected into
//! the CLI handlers, which keeps the parser and the handlers testable with
//! stub renderers.

use crate::markdown::Document;
use std::path::Path;
use thiserror::Error;

/// Fallback output stem when the lesson title yields nothing usable
pub const DEFAULT_FILE_STEM: &str = "giao_an";

/// Errors raised while producing a downloadable artifact.
///
/// Export failures never invalidate the generated Markdown; it stays on
/// disk so the download can be retried.
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO error writing the artifact
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Word document serialization failed
    #[error("document conversion failed: {0}")]
    Docx(String),

    /// The preview capture could not be read or decoded
    #[error("preview capture unusable: {0}")]
    Snapshot(String),

    /// PDF assembly failed
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// Structured-document renderer: ordered blocks in, binary artifact out
pub trait BlockRenderer {
    /// Render the block sequence to `output`
    fn render(&self, document: &Document, output: &Path) -> Result<(), ExportError>;
}

/// Rasterized-document renderer: preview capture in, paged document out
pub trait SnapshotRenderer {
    /// Embed the captured bitmap into a paged document at `output`
    fn render(&self, snapshot: &[u8], title: &str, output: &Path) -> Result<(), ExportError>;
}

/// Word renderer backed by docx-rs
#[derive(Debug, Default)]
pub struct DocxRenderer;

impl BlockRenderer for DocxRenderer {
    fn render(&self, document: &Document, output: &Path) -> Result<(), ExportError> {
        crate::docx_exporter::to_docx(document, output)
    }
}

/// A4 portrait PDF renderer backed by printpdf
#[derive(Debug, Default)]
pub struct A4PdfRenderer;

impl SnapshotRenderer for A4PdfRenderer {
    fn render(&self, snapshot: &[u8], title: &str, output: &Path) -> Result<(), ExportError> {
        crate::pdf_exporter::to_pdf(snapshot, title, output)
    }
}

/// Derive the output file stem from the lesson title.
///
/// Every character outside ASCII alphanumerics becomes an underscore and the
/// result is lower-cased, giving a deterministic ASCII-safe stem for any
/// title. Titles that leave nothing but underscores fall back to
/// [`DEFAULT_FILE_STEM`].
pub fn safe_file_stem(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if stem.chars().all(|c| c == '_') {
        DEFAULT_FILE_STEM.to_string()
    } else {
        stem
    }
}
