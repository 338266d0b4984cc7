// file: src/extractor/mod.rs
// description: fact extraction module exports
// reference: internal module structure

pub mod contact;
pub mod experience;
pub mod patterns;
pub mod qualification;

pub use contact::ContactExtractor;
pub use experience::{ExperienceExtractor, ExperienceSignal};
pub use qualification::QualificationClassifier;
