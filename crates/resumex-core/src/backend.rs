use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level page-to-text step; the parsing
/// pipeline (name/contact heuristics, section location and slicing) lives
/// in `resumex-parsing` and only sees the concatenated document text.
pub trait PdfBackend: Send + Sync {
    /// Extract the full text content of a PDF file, page texts joined in
    /// page order.
    fn extract_text(&self, path: &Path) -> Result<String, BackendError>;
}
