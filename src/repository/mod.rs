// file: src/repository/mod.rs
// description: resume folder discovery module exports
// reference: internal module structure

pub mod scanner;

pub use scanner::{ResumeScanner, ScannedFile};
