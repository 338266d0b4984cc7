// file: src/ocr/fallback.rs
// description: text layer first, ocr when the text layer is too thin
// reference: scanned-document detection by visible character count

use crate::error::Result;
use crate::ocr::TextExtractor;
use std::path::Path;
use tracing::{debug, warn};

pub struct FallbackExtractor<P, F> {
    primary: P,
    fallback: F,
    min_text_chars: usize,
}

impl<P: TextExtractor, F: TextExtractor> FallbackExtractor<P, F> {
    pub fn new(primary: P, fallback: F, min_text_chars: usize) -> Self {
        Self {
            primary,
            fallback,
            min_text_chars,
        }
    }
}

impl<P: TextExtractor, F: TextExtractor> TextExtractor for FallbackExtractor<P, F> {
    fn name(&self) -> &'static str {
        "auto"
    }

    fn extract_text(&self, path: &Path) -> Result<String> {
        match self.primary.extract_text(path) {
            Ok(text) => {
                let visible = text.chars().filter(|c| !c.is_whitespace()).count();
                if visible >= self.min_text_chars {
                    return Ok(text);
                }
                debug!(
                    "{} gave {} visible chars for {}, falling back to {}",
                    self.primary.name(),
                    visible,
                    path.display(),
                    self.fallback.name()
                );
            }
            Err(e) => {
                warn!(
                    "{} failed for {}: {}; falling back to {}",
                    self.primary.name(),
                    path.display(),
                    e,
                    self.fallback.name()
                );
            }
        }

        self.fallback.extract_text(path)
    }
}
