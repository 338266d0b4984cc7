// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod analyzer;
mod processor;
mod progress;

pub use analyzer::ResumeAnalyzer;
pub use processor::{BatchOutcome, ResumeBatchProcessor};
pub use progress::{BatchStats, ProgressTracker};
