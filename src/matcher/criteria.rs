// file: src/matcher/criteria.rs
// description: multi-predicate evaluation of a resume against filter criteria
// reference: conjunction of independently evaluated predicates

use crate::models::{ExtractedFacts, FilterCriteria};
use crate::parser::NormalizedText;

/// Outcome of every predicate for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub skills: bool,
    pub experience: bool,
    pub qualification: bool,
    pub location: bool,
    pub specialization: bool,
    pub certifications: bool,
    pub company: bool,
}

impl Verdict {
    pub fn is_match(&self) -> bool {
        self.skills
            && self.experience
            && self.qualification
            && self.location
            && self.specialization
            && self.certifications
            && self.company
    }

    pub fn failed_predicates(&self) -> Vec<&'static str> {
        [
            ("skills", self.skills),
            ("experience", self.experience),
            ("qualification", self.qualification),
            ("location", self.location),
            ("specialization", self.specialization),
            ("certifications", self.certifications),
            ("company", self.company),
        ]
        .into_iter()
        .filter(|(_, passed)| !passed)
        .map(|(name, _)| name)
        .collect()
    }
}

pub struct CriteriaMatcher;

impl CriteriaMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn matches(
        &self,
        facts: &ExtractedFacts,
        text: &NormalizedText,
        criteria: &FilterCriteria,
    ) -> bool {
        self.evaluate(facts, text, criteria).is_match()
    }

    /// Criterion skills present in the text, in criterion order.
    pub fn matched_skills(&self, text: &NormalizedText, criteria: &FilterCriteria) -> Vec<String> {
        criteria
            .skills()
            .iter()
            .filter(|skill| text.contains(skill))
            .cloned()
            .collect()
    }

    pub fn evaluate(
        &self,
        facts: &ExtractedFacts,
        text: &NormalizedText,
        criteria: &FilterCriteria,
    ) -> Verdict {
        // An empty skill list is an unset criterion, not an unsatisfiable "any of nothing".
        let skills = criteria.skills().is_empty()
            || skill_predicate(text, criteria.skills(), criteria.match_all());

        Verdict {
            skills,
            experience: facts.experience_years >= criteria.min_experience(),
            qualification: facts.qualification.satisfies(criteria.qualification()),
            location: criteria.location().is_none_or(|location| text.contains(location)),
            specialization: any_present(text, criteria.specialization_terms()),
            certifications: any_present(text, criteria.certifications()),
            company: criteria.company().is_none_or(|company| text.contains(company)),
        }
    }
}

impl Default for CriteriaMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw skill predicate: conjunction when `match_all`, disjunction otherwise.
/// Over an empty list the conjunction is true and the disjunction is false.
pub fn skill_predicate(text: &NormalizedText, skills: &[String], match_all: bool) -> bool {
    if match_all {
        skills.iter().all(|skill| text.contains(skill))
    } else {
        skills.iter().any(|skill| text.contains(skill))
    }
}

/// OR over terms; an empty term list places no constraint.
fn any_present(text: &NormalizedText, terms: &[String]) -> bool {
    terms.is_empty() || terms.iter().any(|term| text.contains(term))
}
