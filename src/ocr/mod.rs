// file: src/ocr/mod.rs
// description: text extraction seam between the batch processor and OCR tooling
// reference: pluggable extractor trait with pdf text layer and tesseract backends

pub mod embedded;
pub mod fallback;
pub mod tesseract;

pub use embedded::EmbeddedTextExtractor;
pub use fallback::FallbackExtractor;
pub use tesseract::TesseractOcr;

use crate::config::{OcrConfig, OcrEngine};
use crate::error::Result;
use std::path::Path;

/// Turns one resume document into raw text.
pub trait TextExtractor {
    fn name(&self) -> &'static str;

    fn extract_text(&self, path: &Path) -> Result<String>;
}

impl<T: TextExtractor + ?Sized> TextExtractor for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn extract_text(&self, path: &Path) -> Result<String> {
        (**self).extract_text(path)
    }
}

pub fn build_extractor(config: &OcrConfig) -> Box<dyn TextExtractor> {
    match config.engine {
        OcrEngine::Tesseract => Box::new(TesseractOcr::new(config.clone())),
        OcrEngine::Embedded => Box::new(EmbeddedTextExtractor::new()),
        OcrEngine::Auto => Box::new(FallbackExtractor::new(
            EmbeddedTextExtractor::new(),
            TesseractOcr::new(config.clone()),
            config.min_text_chars,
        )),
    }
}
