//! Single forward pass: transcript, extraction, routing.

use tracing::info;

use crate::claim::{ClaimParser, RuleBasedClaimParser};
use crate::models::claim::ClaimReport;
use crate::routing::RouteDecisionEngine;
use crate::transcript::join_pages;

/// Extract fields from a transcript and route the claim.
pub fn process_claim(text: &str) -> ClaimReport {
    ClaimPipeline::new().process(text)
}

/// Join page transcripts with markers, then process them as one claim.
pub fn process_pages<S: AsRef<str>>(pages: &[S]) -> ClaimReport {
    process_claim(&join_pages(pages))
}

/// Parser and routing engine bundled for repeated use.
pub struct ClaimPipeline<P = RuleBasedClaimParser> {
    parser: P,
    engine: RouteDecisionEngine,
}

impl ClaimPipeline {
    pub fn new() -> Self {
        Self::with_parser(RuleBasedClaimParser::new())
    }
}

impl Default for ClaimPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ClaimParser> ClaimPipeline<P> {
    /// Use a custom parser in front of the standard routing rules.
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            engine: RouteDecisionEngine::new(),
        }
    }

    pub fn process(&self, text: &str) -> ClaimReport {
        let extraction = self.parser.parse(text);
        let decision = self.engine.decide(&extraction.fields, &extraction.missing);

        info!(
            "Claim routed to {} ({} missing fields, {}ms)",
            decision.route,
            extraction.missing.len(),
            extraction.processing_time_ms
        );

        ClaimReport::new(extraction.fields, extraction.missing, decision)
    }
}
