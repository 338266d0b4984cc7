// file: src/models/report.rs
// description: match results and report rows
// reference: internal data structures

use crate::models::facts::ExtractedFacts;
use serde::{Deserialize, Serialize};

/// Printed in reports when a contact field could not be extracted.
pub const NOT_FOUND: &str = "Not found";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub document_id: String,
    pub facts: ExtractedFacts,
    pub is_match: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub filename: String,
    pub experience: f64,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
}

impl ReportRow {
    pub fn experience_display(&self) -> String {
        format_experience(self.experience)
    }

    pub fn email_display(&self) -> &str {
        self.email.as_deref().unwrap_or(NOT_FOUND)
    }

    pub fn phone_display(&self) -> &str {
        self.phone.as_deref().unwrap_or(NOT_FOUND)
    }

    pub fn skills_display(&self) -> String {
        self.skills.join(", ")
    }
}

impl From<&MatchResult> for ReportRow {
    fn from(result: &MatchResult) -> Self {
        Self {
            filename: result.document_id.clone(),
            experience: result.facts.experience_years,
            email: result.facts.email.clone(),
            phone: result.facts.phone.clone(),
            skills: result.facts.matched_skills.clone(),
        }
    }
}

/// Whole years print without a fractional part ("8"), others keep it ("2.5").
pub fn format_experience(years: f64) -> String {
    if years.fract() == 0.0 {
        format!("{:.0}", years)
    } else {
        format!("{}", years)
    }
}
