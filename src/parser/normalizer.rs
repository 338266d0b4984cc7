// file: src/parser/normalizer.rs
// description: OCR text normalization for case-insensitive matching
// reference: unicode lowercase mapping

use std::fmt;

/// Lower-cased document text. Every matcher and extractor takes this type, so
/// substring tests never see mixed-case OCR output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, raw: &str) -> NormalizedText {
        NormalizedText(raw.to_lowercase())
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
