//! Claim field extraction module.

mod parser;
pub mod rules;

pub use parser::{ClaimParser, ExtractionResult, RuleBasedClaimParser};
