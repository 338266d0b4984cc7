// file: src/ocr/embedded.rs
// description: reads the embedded text layer of a pdf
// reference: https://docs.rs/pdf-extract

use crate::error::{FilterError, Result};
use crate::ocr::TextExtractor;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::debug;

/// Text-layer reader. Scanned resumes have no text layer and come back empty.
pub struct EmbeddedTextExtractor;

impl EmbeddedTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmbeddedTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for EmbeddedTextExtractor {
    fn name(&self) -> &'static str {
        "embedded"
    }

    fn extract_text(&self, path: &Path) -> Result<String> {
        debug!("Reading text layer: {}", path.display());

        // pdf-extract panics on some malformed documents
        match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text(path))) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(FilterError::extraction(path, e.to_string())),
            Err(_) => Err(FilterError::extraction(path, "pdf parser panicked")),
        }
    }
}
