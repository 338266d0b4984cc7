// file: src/extractor/qualification.rs
// description: degree tier classification from keyword sets
// reference: configurable keyword-based classification

use crate::extractor::patterns::{DEFAULT_POSTGRADUATE_KEYWORDS, DEFAULT_UNDERGRADUATE_KEYWORDS};
use crate::models::QualificationProfile;
use crate::parser::NormalizedText;

/// Substring keyword classifier. Short keywords such as "be" and "me" also hit
/// ordinary words ("member", "become"), a known false-positive source.
pub struct QualificationClassifier {
    undergraduate: Vec<String>,
    postgraduate: Vec<String>,
}

impl QualificationClassifier {
    pub fn new<S: AsRef<str>>(undergraduate: &[S], postgraduate: &[S]) -> Self {
        Self {
            undergraduate: normalize_keywords(undergraduate),
            postgraduate: normalize_keywords(postgraduate),
        }
    }

    pub fn classify(&self, text: &NormalizedText) -> QualificationProfile {
        QualificationProfile {
            is_undergraduate: contains_any(text, &self.undergraduate),
            is_postgraduate: contains_any(text, &self.postgraduate),
        }
    }
}

impl Default for QualificationClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_UNDERGRADUATE_KEYWORDS, DEFAULT_POSTGRADUATE_KEYWORDS)
    }
}

fn normalize_keywords<S: AsRef<str>>(keywords: &[S]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

fn contains_any(text: &NormalizedText, keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TextNormalizer;

    fn classify(text: &str) -> QualificationProfile {
        QualificationClassifier::default().classify(&TextNormalizer::new().normalize(text))
    }

    #[test]
    fn test_undergraduate_detection() {
        let profile = classify("B.Tech in Mechanical Engineering");
        assert!(profile.is_undergraduate);

        assert!(classify("Bachelor of Commerce").is_undergraduate);
        assert!(classify("btech (cse)").is_undergraduate);
    }

    #[test]
    fn test_postgraduate_detection() {
        assert!(classify("MBA, Finance").is_postgraduate);
        assert!(classify("M.Sc Physics").is_postgraduate);
        assert!(classify("Master of Design").is_postgraduate);
    }

    #[test]
    fn test_both_degrees() {
        let profile = classify("B.Tech 2014, M.Tech 2016");
        assert!(profile.is_undergraduate);
        assert!(profile.is_postgraduate);
    }

    #[test]
    fn test_neither_degree() {
        let profile = classify("diploma holder, 10 yrs on site");
        assert!(!profile.is_undergraduate);
        assert!(!profile.is_postgraduate);
    }

    #[test]
    fn test_short_keyword_false_positive_is_preserved() {
        // "member" contains both "me" and "be"
        let profile = classify("member of the safety committee");
        assert!(profile.is_undergraduate);
        assert!(profile.is_postgraduate);
    }

    #[test]
    fn test_custom_keywords() {
        let classifier = QualificationClassifier::new(&["B.Com"], &["PhD"]);
        let text = TextNormalizer::new().normalize("phd in chemistry");
        let profile = classifier.classify(&text);

        assert!(!profile.is_undergraduate);
        assert!(profile.is_postgraduate);
    }
}
