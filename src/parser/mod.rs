// file: src/parser/mod.rs
// description: text normalization module exports
// reference: internal module structure

pub mod normalizer;

pub use normalizer::{NormalizedText, TextNormalizer};
