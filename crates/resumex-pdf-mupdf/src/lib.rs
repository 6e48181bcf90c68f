use std::path::Path;

use mupdf::{Document, TextPageFlags};

use resumex_core::{BackendError, PdfBackend};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island — it isolates the mupdf dependency
/// so the parsing and reporting crates do not transitively depend on it.
///
/// Pages are extracted in order and joined with newlines. A page whose
/// text extraction fails contributes nothing: the failure is logged and
/// the remaining pages are still extracted. No header/footer region is
/// excluded — the candidate name line sits at the very top of page one.
#[derive(Debug, Default)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for MupdfBackend {
    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::OpenError("invalid path encoding".into()))?;

        let document =
            Document::open(path_str).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut pages_text = Vec::new();

        for (page_num, page_result) in document
            .pages()
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?
            .enumerate()
        {
            let page = match page_result {
                Ok(page) => page,
                Err(err) => {
                    tracing::warn!(page = page_num + 1, error = %err, "could not load page");
                    pages_text.push(String::new());
                    continue;
                }
            };

            let text_page = match page.to_text_page(TextPageFlags::empty()) {
                Ok(text_page) => text_page,
                Err(err) => {
                    tracing::warn!(
                        page = page_num + 1,
                        error = %err,
                        "could not extract text from page"
                    );
                    pages_text.push(String::new());
                    continue;
                }
            };

            // Block/line iteration keeps one source line per output line
            let mut page_text = String::new();
            for block in text_page.blocks() {
                for line in block.lines() {
                    let line_text: String = line
                        .chars()
                        .map(|c| c.char().unwrap_or('\u{FFFD}'))
                        .collect();
                    page_text.push_str(&line_text);
                    page_text.push('\n');
                }
            }
            pages_text.push(page_text);
        }

        Ok(pages_text.join("\n"))
    }
}
