//! Route decision engine.
//!
//! An ordered list of business rules is evaluated over the extracted fields;
//! the first rule that matches decides the route and its reasoning.

mod rules;

pub use rules::{
    default_rule, fast_track_rule, injury_rule, missing_fields_rule, suspicious_keyword_rule,
    RoutingRule, FAST_TRACK_THRESHOLD, SUSPICIOUS_KEYWORDS,
};

use tracing::debug;

use crate::models::claim::{ExtractedFields, MandatoryField, RouteDecision};

/// Evaluates routing rules in fixed priority order.
#[derive(Debug, Clone)]
pub struct RouteDecisionEngine {
    rules: Vec<RoutingRule>,
}

impl RouteDecisionEngine {
    /// Create the engine with the standard rule order.
    pub fn new() -> Self {
        Self {
            rules: vec![
                missing_fields_rule(),
                suspicious_keyword_rule(),
                injury_rule(),
                fast_track_rule(),
                default_rule(),
            ],
        }
    }

    /// Decide the route for a claim. Rules after the first match are not
    /// evaluated.
    pub fn decide(&self, fields: &ExtractedFields, missing: &[MandatoryField]) -> RouteDecision {
        for rule in &self.rules {
            if let Some(decision) = rule.evaluate(fields, missing) {
                debug!("Rule '{}' routed claim to {}", rule.name, decision.route);
                return decision;
            }
        }

        // Only reachable with a rule set lacking the catch-all.
        rules::no_criteria_decision()
    }
}

impl Default for RouteDecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Decide the route for a claim using the standard rule order.
pub fn decide(fields: &ExtractedFields, missing: &[MandatoryField]) -> RouteDecision {
    RouteDecisionEngine::new().decide(fields, missing)
}
