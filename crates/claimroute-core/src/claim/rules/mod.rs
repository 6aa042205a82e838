//! Rule-based field extractors for claim transcripts.

pub mod amounts;
pub mod keywords;
pub mod patterns;
pub mod probe;

pub use amounts::{format_usd, parse_currency_amount, AmountExtractor};
pub use keywords::{asset_type_classifier, claim_type_classifier, KeywordClassifier};
pub use probe::{normalize_description, Probe, ProbeChain};

/// Trait for field extractors.
///
/// A miss is `None`; extractors never fail.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}
