// file: src/extractor/experience.rs
// description: years-of-experience estimation from free resume text
// reference: union of numeric, word, parenthetical and superlative signals

use crate::error::Result;
use crate::extractor::patterns::{
    NUMERIC_EXPERIENCE, PARENTHESIZED_NUMBER, PARENTHETICAL_MIN_YEARS, YEAR_UNIT,
    default_number_words,
};
use crate::parser::NormalizedText;
use regex::Regex;
use std::collections::BTreeMap;
use tracing::trace;

/// Kind of evidence an experience figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceSignal {
    Numeric,
    Word,
    Parenthetical,
    Superlative,
}

struct WordPatterns {
    value: u32,
    with_unit: Regex,
    superlative: Regex,
}

/// Estimates years of experience as the maximum over every signal found.
///
/// The parenthetical heuristic treats any "(n)" with n >= 5 as experience. It also
/// fires on list numbering and phone fragments; that is a known false-positive source.
pub struct ExperienceExtractor {
    words: Vec<WordPatterns>,
}

impl ExperienceExtractor {
    pub fn new() -> Self {
        // Vocabulary words are plain lowercase letters, so the built-in set always compiles.
        Self::with_vocabulary(&default_number_words())
            .expect("built-in number vocabulary compiles")
    }

    pub fn with_vocabulary(vocabulary: &BTreeMap<String, u32>) -> Result<Self> {
        let mut words = Vec::with_capacity(vocabulary.len());

        for (word, value) in vocabulary {
            let word = regex::escape(&word.trim().to_lowercase());
            let with_unit = Regex::new(&format!(r"\b{}\s*(?:plus\s*)?{}", word, YEAR_UNIT))?;
            let superlative = Regex::new(&format!(r"(?:\bover|\bmore than)\s+{}\b", word))?;

            words.push(WordPatterns {
                value: *value,
                with_unit,
                superlative,
            });
        }

        Ok(Self { words })
    }

    pub fn extract(&self, text: &NormalizedText) -> f64 {
        self.signals(text)
            .into_iter()
            .map(|(_, years)| years)
            .fold(0.0, f64::max)
    }

    /// Every experience figure found, tagged with the heuristic that produced it.
    pub fn signals(&self, text: &NormalizedText) -> Vec<(ExperienceSignal, f64)> {
        let text = text.as_str();
        let mut found = Vec::new();

        for captures in NUMERIC_EXPERIENCE.captures_iter(text) {
            match captures.get(1).and_then(|m| parse_years(m.as_str())) {
                Some(years) => found.push((ExperienceSignal::Numeric, years)),
                None => trace!("Skipping unparsable experience token: {:?}", &captures[0]),
            }
        }

        for word in &self.words {
            if word.with_unit.is_match(text) {
                found.push((ExperienceSignal::Word, f64::from(word.value)));
            }
        }

        for captures in PARENTHESIZED_NUMBER.captures_iter(text) {
            if let Some(value) = captures.get(1).and_then(|m| m.as_str().parse::<u32>().ok())
                && value >= PARENTHETICAL_MIN_YEARS
            {
                found.push((ExperienceSignal::Parenthetical, f64::from(value)));
            }
        }

        for word in &self.words {
            if word.superlative.is_match(text) {
                found.push((ExperienceSignal::Superlative, f64::from(word.value)));
            }
        }

        found
    }
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_years(token: &str) -> Option<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|years| years.is_finite() && *years >= 0.0)
}
