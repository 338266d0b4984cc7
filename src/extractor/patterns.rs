// file: src/extractor/patterns.rs
// description: compiled regex patterns and default vocabularies for resume extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

pub const DEFAULT_EMAIL_PATTERN: &str = r"[\w.\-]+@[\w.\-]+\.\w+";

pub const INDIAN_MOBILE_PATTERN: &str = r"(?:\+91[\-\s]?|\b)[789]\d{9}\b";
/// Area code, a required separator, then the subscriber number.
pub const GROUPED_PHONE_PATTERN: &str = r"(?:\(\d{3,4}\)|\b\d{3,4})[\s\-]\d{6,8}\b";
pub const DEFAULT_PHONE_PATTERNS: &[&str] = &[INDIAN_MOBILE_PATTERN, GROUPED_PHONE_PATTERN];

pub const DEFAULT_UNDERGRADUATE_KEYWORDS: &[&str] = &["b.tech", "btech", "b.e", "be", "bachelor"];
pub const DEFAULT_POSTGRADUATE_KEYWORDS: &[&str] = &[
    "m.tech", "mtech", "m.e", "me", "mba", "msc", "m.sc", "master",
];

/// Year units accepted after a number or number word.
pub const YEAR_UNIT: &str = r"(?:years?|yrs?)";

/// Smallest parenthesised value treated as an experience figure.
pub const PARENTHETICAL_MIN_YEARS: u32 = 5;

const NUMBER_WORDS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
];

pub fn default_number_words() -> BTreeMap<String, u32> {
    NUMBER_WORDS
        .iter()
        .map(|(word, value)| (word.to_string(), *value))
        .collect()
}

lazy_static! {
    // Experience signals
    pub static ref NUMERIC_EXPERIENCE: Regex = Regex::new(
        &format!(r"(\d+(?:\.\d+)?)\s*\+?\s*{}", YEAR_UNIT)
    ).expect("NUMERIC_EXPERIENCE regex is valid");

    pub static ref PARENTHESIZED_NUMBER: Regex = Regex::new(
        r"\((\d{1,2})\)"
    ).expect("PARENTHESIZED_NUMBER regex is valid");

    // Contact details
    pub static ref EMAIL: Regex = Regex::new(DEFAULT_EMAIL_PATTERN)
        .expect("EMAIL regex is valid");

    pub static ref PHONE: Regex = Regex::new(&alternation(DEFAULT_PHONE_PATTERNS))
        .expect("PHONE regex is valid");
}

/// Joins patterns into one alternation so the leftmost match across all of them wins.
pub fn alternation<S: AsRef<str>>(patterns: &[S]) -> String {
    patterns
        .iter()
        .map(|p| format!("(?:{})", p.as_ref()))
        .collect::<Vec<_>>()
        .join("|")
}
