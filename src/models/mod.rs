// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod criteria;
pub mod facts;
pub mod report;

pub use criteria::{CriteriaInput, FilterCriteria, MATCH_ALL_SENTINEL, QualificationRequirement};
pub use facts::{ContactInfo, ExtractedFacts, QualificationProfile};
pub use report::{MatchResult, NOT_FOUND, ReportRow, format_experience};
