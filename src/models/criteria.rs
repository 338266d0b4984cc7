// file: src/models/criteria.rs
// description: recruiter filter criteria with boundary normalization
// reference: immutable per-run configuration record

use crate::error::{FilterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel accepted for location and company meaning "do not filter".
pub const MATCH_ALL_SENTINEL: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualificationRequirement {
    #[default]
    All,
    Undergraduate,
    Postgraduate,
}

impl QualificationRequirement {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualificationRequirement::All => "all",
            QualificationRequirement::Undergraduate => "undergraduate",
            QualificationRequirement::Postgraduate => "postgraduate",
        }
    }
}

impl FromStr for QualificationRequirement {
    type Err = FilterError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "undergraduate" => Ok(Self::Undergraduate),
            "postgraduate" => Ok(Self::Postgraduate),
            other => Err(FilterError::Criteria(format!(
                "qualification must be one of all, undergraduate, postgraduate (got '{}')",
                other
            ))),
        }
    }
}

/// Raw recruiter input, exactly as typed. Lists are comma separated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaInput {
    pub skills: String,
    pub match_all: bool,
    pub min_experience: f64,
    pub qualification: String,
    pub location: String,
    pub specialization: String,
    pub certifications: String,
    pub company: String,
}

impl Default for CriteriaInput {
    fn default() -> Self {
        Self {
            skills: String::new(),
            match_all: false,
            min_experience: 0.0,
            qualification: MATCH_ALL_SENTINEL.to_string(),
            location: MATCH_ALL_SENTINEL.to_string(),
            specialization: String::new(),
            certifications: String::new(),
            company: MATCH_ALL_SENTINEL.to_string(),
        }
    }
}

/// Normalized criteria for one filtering run. All strings are lower-cased here,
/// at the input boundary; matchers compare them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterCriteria {
    skills: Vec<String>,
    match_all: bool,
    min_experience: f64,
    qualification: QualificationRequirement,
    location: Option<String>,
    specialization_terms: Vec<String>,
    certifications: Vec<String>,
    company: Option<String>,
}

impl FilterCriteria {
    pub fn from_input(input: &CriteriaInput) -> Result<Self> {
        if !input.min_experience.is_finite() || input.min_experience < 0.0 {
            return Err(FilterError::Criteria(format!(
                "min_experience must be a non-negative number (got {})",
                input.min_experience
            )));
        }

        Ok(Self {
            skills: split_list(&input.skills),
            match_all: input.match_all,
            min_experience: input.min_experience,
            qualification: input.qualification.parse()?,
            location: scope(&input.location),
            specialization_terms: input
                .specialization
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            certifications: split_list(&input.certifications),
            company: scope(&input.company),
        })
    }

    /// Criteria with every field at its match-everything sentinel.
    pub fn match_everything() -> Self {
        Self {
            skills: Vec::new(),
            match_all: false,
            min_experience: 0.0,
            qualification: QualificationRequirement::All,
            location: None,
            specialization_terms: Vec::new(),
            certifications: Vec::new(),
            company: None,
        }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn match_all(&self) -> bool {
        self.match_all
    }

    pub fn min_experience(&self) -> f64 {
        self.min_experience
    }

    pub fn qualification(&self) -> QualificationRequirement {
        self.qualification
    }

    /// `None` when the location filter is "all" or empty.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn specialization_terms(&self) -> &[String] {
        &self.specialization_terms
    }

    pub fn certifications(&self) -> &[String] {
        &self.certifications
    }

    /// `None` when the company filter is "all" or empty.
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = |values: &[String]| {
            if values.is_empty() {
                "-".to_string()
            } else {
                values.join(", ")
            }
        };

        write!(
            f,
            "skills=[{}] ({}), min_experience={}, qualification={}, location={}, \
             specialization=[{}], certifications=[{}], company={}",
            list(&self.skills),
            if self.match_all { "all" } else { "any" },
            self.min_experience,
            self.qualification.as_str(),
            self.location().unwrap_or(MATCH_ALL_SENTINEL),
            list(&self.specialization_terms),
            list(&self.certifications),
            self.company().unwrap_or(MATCH_ALL_SENTINEL),
        )
    }
}

fn split_list(raw: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();

    for value in raw.split(',').map(|v| v.trim().to_lowercase()) {
        if !value.is_empty() && !values.contains(&value) {
            values.push(value);
        }
    }

    values
}

fn scope(raw: &str) -> Option<String> {
    let value = raw.trim().to_lowercase();
    if value.is_empty() || value == MATCH_ALL_SENTINEL {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_input_matches_everything() {
        let criteria = FilterCriteria::from_input(&CriteriaInput::default()).unwrap();
        assert_eq!(criteria, FilterCriteria::match_everything());
    }

    #[test]
    fn test_lists_are_normalized() {
        let input = CriteriaInput {
            skills: " Python, SQL ,, python,Power BI ".to_string(),
            certifications: "PMP,  ,Six Sigma".to_string(),
            ..CriteriaInput::default()
        };
        let criteria = FilterCriteria::from_input(&input).unwrap();

        assert_eq!(criteria.skills(), ["python", "sql", "power bi"]);
        assert_eq!(criteria.certifications(), ["pmp", "six sigma"]);
    }

    #[test]
    fn test_scope_sentinels() {
        let input = CriteriaInput {
            location: "ALL".to_string(),
            company: "  ".to_string(),
            ..CriteriaInput::default()
        };
        let criteria = FilterCriteria::from_input(&input).unwrap();
        assert_eq!(criteria.location(), None);
        assert_eq!(criteria.company(), None);

        let input = CriteriaInput {
            location: " Pune ".to_string(),
            company: "Acme Corp".to_string(),
            ..CriteriaInput::default()
        };
        let criteria = FilterCriteria::from_input(&input).unwrap();
        assert_eq!(criteria.location(), Some("pune"));
        assert_eq!(criteria.company(), Some("acme corp"));
    }

    #[test]
    fn test_specialization_terms() {
        let input = CriteriaInput {
            specialization: "Data   Science\tML".to_string(),
            ..CriteriaInput::default()
        };
        let criteria = FilterCriteria::from_input(&input).unwrap();
        assert_eq!(criteria.specialization_terms(), ["data", "science", "ml"]);
    }

    #[test]
    fn test_negative_experience_rejected() {
        let input = CriteriaInput {
            min_experience: -1.0,
            ..CriteriaInput::default()
        };
        assert!(FilterCriteria::from_input(&input).is_err());

        let input = CriteriaInput {
            min_experience: f64::NAN,
            ..CriteriaInput::default()
        };
        assert!(FilterCriteria::from_input(&input).is_err());
    }

    #[test]
    fn test_qualification_parsing() {
        assert_eq!(
            "Postgraduate".parse::<QualificationRequirement>().unwrap(),
            QualificationRequirement::Postgraduate
        );
        assert_eq!(
            "".parse::<QualificationRequirement>().unwrap(),
            QualificationRequirement::All
        );
        assert!("phd".parse::<QualificationRequirement>().is_err());
    }

    #[test]
    fn test_display_summary() {
        let input = CriteriaInput {
            skills: "rust".to_string(),
            match_all: true,
            ..CriteriaInput::default()
        };
        let summary = FilterCriteria::from_input(&input).unwrap().to_string();

        assert!(summary.contains("skills=[rust] (all)"));
        assert!(summary.contains("location=all"));
    }
}
