use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod config;
pub mod contact;
pub mod name;
pub mod section;
pub mod text;

pub use config::{ListOverride, ParseConfig, ParseConfigBuilder, SectionJoiner};
pub use contact::ContactInfo;
// Re-export domain types from core (canonical definitions live there)
pub use resumex_core::{BackendError, PdfBackend, ResumeRecord, Section};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("PDF backend error: {0}")]
    Backend(#[from] BackendError),
}

/// The resume field extraction pipeline.
///
/// Holds a [`ParseConfig`] and exposes each pipeline step as a method. The
/// default constructor uses built-in defaults; use
/// [`ResumeParser::with_config`] to supply extra section synonyms, a
/// different join separator, or custom skip lists.
///
/// Pipeline: text extraction (via a [`PdfBackend`]) → contact/name
/// extraction and section location over the full text → section slicing →
/// record assembly. Assembly is total: it always produces a complete
/// record, even an entirely empty one.
pub struct ResumeParser {
    config: ParseConfig,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser {
    /// Create a parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParseConfig::default(),
        }
    }

    /// Create a parser with a custom configuration.
    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the current config.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Extract raw document text (step 1), propagating backend failure.
    pub fn extract_text(
        &self,
        path: &Path,
        backend: &dyn PdfBackend,
    ) -> Result<String, ParseError> {
        Ok(text::expand_ligatures(&backend.extract_text(path)?))
    }

    /// Extract raw document text, treating an unopenable or non-PDF input
    /// as an empty document: the failure is logged and an empty string
    /// returned, so downstream fields come out empty rather than erroring.
    pub fn extract_text_lossy(&self, path: &Path, backend: &dyn PdfBackend) -> String {
        match self.extract_text(path, backend) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "text extraction failed; treating document as empty"
                );
                String::new()
            }
        }
    }

    /// Assemble a record from already-extracted document text (steps 2-4).
    pub fn parse_text(&self, text: &str) -> ResumeRecord {
        let mut record = ResumeRecord::default();
        if text.trim().is_empty() {
            return record;
        }

        let contact = contact::extract_contact(text, &self.config);
        record.email = contact.email;
        record.phone = contact.phone;
        record.linkedin = contact.linkedin;
        record.github = contact.github;
        record.website = contact.website;
        record.name = name::extract_name(text, &self.config);

        let text_lower = text.to_lowercase();
        let boundaries = section::locate_sections(&text_lower, &self.config);
        for sec in Section::ALL {
            *record.section_mut(sec) =
                section::extract_content(text, sec, &boundaries, &self.config);
        }

        record
    }

    /// Parse one PDF file into a record, propagating extraction failure.
    pub fn parse_file(
        &self,
        path: &Path,
        backend: &dyn PdfBackend,
    ) -> Result<ResumeRecord, ParseError> {
        let text = self.extract_text(path, backend)?;
        Ok(self.parse_text(&text))
    }

    /// Parse one PDF file, degrading extraction failure to an all-empty
    /// record.
    pub fn parse_file_lossy(&self, path: &Path, backend: &dyn PdfBackend) -> ResumeRecord {
        let text = self.extract_text_lossy(path, backend);
        self.parse_text(&text)
    }

    /// Parse a batch of PDF files, one record per document that extracted
    /// successfully. A failing document is logged and skipped; its
    /// siblings are unaffected.
    pub fn parse_batch(&self, paths: &[PathBuf], backend: &dyn PdfBackend) -> Vec<ResumeRecord> {
        let mut records = Vec::new();
        for path in paths {
            match self.parse_file(path, backend) {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "skipping document"
                    );
                }
            }
        }
        records
    }
}

/// Parse a resume PDF with the default configuration.
pub fn parse_resume(path: &Path, backend: &dyn PdfBackend) -> Result<ResumeRecord, ParseError> {
    ResumeParser::new().parse_file(path, backend)
}
