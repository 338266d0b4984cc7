// file: src/models/facts.rs
// description: per-document facts derived from OCR text
// reference: internal data structures

use crate::models::criteria::QualificationRequirement;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Degree tiers mentioned in a resume. Both flags may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QualificationProfile {
    pub is_undergraduate: bool,
    pub is_postgraduate: bool,
}

impl QualificationProfile {
    pub fn satisfies(&self, requirement: QualificationRequirement) -> bool {
        match requirement {
            QualificationRequirement::All => true,
            QualificationRequirement::Undergraduate => self.is_undergraduate,
            QualificationRequirement::Postgraduate => self.is_postgraduate,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractedFacts {
    pub experience_years: f64,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub matched_skills: Vec<String>,
    pub qualification: QualificationProfile,
}

impl ExtractedFacts {
    pub fn new(
        experience_years: f64,
        contact: ContactInfo,
        qualification: QualificationProfile,
        matched_skills: Vec<String>,
    ) -> Self {
        Self {
            experience_years,
            email: contact.email,
            phone: contact.phone,
            matched_skills,
            qualification,
        }
    }
}
