// file: src/extractor/contact.rs
// description: email and phone extraction from resume text
// reference: first-match pattern extraction

use crate::error::Result;
use crate::extractor::patterns::{EMAIL, PHONE, alternation};
use crate::models::ContactInfo;
use crate::parser::NormalizedText;
use regex::Regex;

pub struct ContactExtractor {
    email: Regex,
    phone: Regex,
}

impl ContactExtractor {
    pub fn new() -> Self {
        Self {
            email: (*EMAIL).clone(),
            phone: (*PHONE).clone(),
        }
    }

    /// Builds an extractor from configured patterns. Phone patterns are tried as one
    /// alternation, so the leftmost phone-like substring wins regardless of list order.
    pub fn from_patterns<S: AsRef<str>>(email_pattern: &str, phone_patterns: &[S]) -> Result<Self> {
        let email = Regex::new(email_pattern)?;
        let phone = if phone_patterns.is_empty() {
            (*PHONE).clone()
        } else {
            Regex::new(&alternation(phone_patterns))?
        };

        Ok(Self { email, phone })
    }

    pub fn extract(&self, text: &NormalizedText) -> ContactInfo {
        ContactInfo {
            email: self.extract_email(text.as_str()),
            phone: self.extract_phone(text.as_str()),
        }
    }

    fn extract_email(&self, text: &str) -> Option<String> {
        self.email.find(text).map(|m| m.as_str().to_string())
    }

    fn extract_phone(&self, text: &str) -> Option<String> {
        self.phone.find(text).map(|m| m.as_str().trim().to_string())
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}
