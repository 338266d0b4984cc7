// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod matcher;
pub mod models;
pub mod ocr;
pub mod parser;
pub mod pipeline;
pub mod repository;
pub mod utils;

pub use config::{Config, HeuristicsConfig, OcrConfig, OcrEngine, PathsConfig, ReportConfig};
pub use error::{FilterError, Result};
pub use exporter::{CsvExporter, ExportManifest, JsonExporter, ReportColumns, ReportTable};
pub use extractor::{ContactExtractor, ExperienceExtractor, QualificationClassifier};
pub use matcher::{CriteriaMatcher, Verdict};
pub use models::{
    CriteriaInput, ExtractedFacts, FilterCriteria, MatchResult, QualificationRequirement,
    ReportRow,
};
pub use ocr::{TextExtractor, build_extractor};
pub use parser::{NormalizedText, TextNormalizer};
pub use pipeline::{BatchOutcome, BatchStats, ResumeAnalyzer, ResumeBatchProcessor};
pub use repository::{ResumeScanner, ScannedFile};
pub use utils::{OperationTimer, Validator};
