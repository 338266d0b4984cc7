// file: src/pipeline/analyzer.rs
// description: per-document extraction and matching
// reference: normalizer, extractors and matcher wired for one resume

use crate::config::HeuristicsConfig;
use crate::error::Result;
use crate::extractor::{ContactExtractor, ExperienceExtractor, QualificationClassifier};
use crate::matcher::{CriteriaMatcher, Verdict};
use crate::models::{ExtractedFacts, FilterCriteria, MatchResult};
use crate::parser::{NormalizedText, TextNormalizer};
use tracing::debug;

pub struct ResumeAnalyzer {
    normalizer: TextNormalizer,
    experience: ExperienceExtractor,
    contact: ContactExtractor,
    qualification: QualificationClassifier,
    matcher: CriteriaMatcher,
}

impl ResumeAnalyzer {
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            experience: ExperienceExtractor::new(),
            contact: ContactExtractor::new(),
            qualification: QualificationClassifier::default(),
            matcher: CriteriaMatcher::new(),
        }
    }

    pub fn from_config(config: &HeuristicsConfig) -> Result<Self> {
        Ok(Self {
            normalizer: TextNormalizer::new(),
            experience: ExperienceExtractor::with_vocabulary(&config.number_words)?,
            contact: ContactExtractor::from_patterns(&config.email_pattern, &config.phone_patterns)?,
            qualification: QualificationClassifier::new(
                &config.undergraduate_keywords,
                &config.postgraduate_keywords,
            ),
            matcher: CriteriaMatcher::new(),
        })
    }

    pub fn normalize(&self, raw_text: &str) -> NormalizedText {
        self.normalizer.normalize(raw_text)
    }

    pub fn extract_facts(&self, text: &NormalizedText, criteria: &FilterCriteria) -> ExtractedFacts {
        ExtractedFacts::new(
            self.experience.extract(text),
            self.contact.extract(text),
            self.qualification.classify(text),
            self.matcher.matched_skills(text, criteria),
        )
    }

    pub fn evaluate(
        &self,
        facts: &ExtractedFacts,
        text: &NormalizedText,
        criteria: &FilterCriteria,
    ) -> Verdict {
        self.matcher.evaluate(facts, text, criteria)
    }

    pub fn analyze(&self, document_id: &str, raw_text: &str, criteria: &FilterCriteria) -> MatchResult {
        let text = self.normalize(raw_text);
        let facts = self.extract_facts(&text, criteria);
        let verdict = self.evaluate(&facts, &text, criteria);

        debug!(
            "{}: experience={} email={:?} phone={:?} skills={:?}",
            document_id, facts.experience_years, facts.email, facts.phone, facts.matched_skills
        );

        if !verdict.is_match() {
            debug!("{} rejected by: {}", document_id, verdict.failed_predicates().join(", "));
        }

        MatchResult {
            document_id: document_id.to_string(),
            facts,
            is_match: verdict.is_match(),
        }
    }
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
