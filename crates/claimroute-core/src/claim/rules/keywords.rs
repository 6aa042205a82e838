//! Keyword-based inference over the whole transcript.

use super::FieldExtractor;
use crate::models::claim::ClaimType;

/// Ordered `(keyword, category)` pairs matched by case-insensitive substring
/// search. The first pair whose keyword occurs wins; list order is the
/// tie-break when several keywords are present.
#[derive(Debug, Clone)]
pub struct KeywordClassifier<T> {
    rules: Vec<(&'static str, T)>,
    default: Option<T>,
}

impl<T: Clone> KeywordClassifier<T> {
    pub fn new(rules: Vec<(&'static str, T)>) -> Self {
        Self {
            rules,
            default: None,
        }
    }

    /// Category returned when no keyword matches.
    pub fn with_default(mut self, default: T) -> Self {
        self.default = Some(default);
        self
    }

    /// Return the matched keyword and its category.
    pub fn classify(&self, text: &str) -> Option<(&'static str, T)> {
        let upper = text.to_uppercase();
        self.rules
            .iter()
            .find(|(keyword, _)| upper.contains(&keyword.to_uppercase()))
            .map(|(keyword, category)| (*keyword, category.clone()))
    }
}

impl<T: Clone> FieldExtractor for KeywordClassifier<T> {
    type Output = T;

    fn extract(&self, text: &str) -> Option<T> {
        self.classify(text)
            .map(|(_, category)| category)
            .or_else(|| self.default.clone())
    }
}

/// Claim type: injury, then theft, otherwise property damage.
pub fn claim_type_classifier() -> KeywordClassifier<ClaimType> {
    KeywordClassifier::new(vec![
        ("INJURY", ClaimType::Injury),
        ("MEDIC", ClaimType::Injury),
        ("THEFT", ClaimType::Theft),
    ])
    .with_default(ClaimType::PropertyDamage)
}

/// Asset type: an automobile when the form mentions one. No default.
pub fn asset_type_classifier() -> KeywordClassifier<&'static str> {
    KeywordClassifier::new(vec![
        ("AUTOMOBILE", "Automobile"),
        ("VEHICLE", "Automobile"),
    ])
}
