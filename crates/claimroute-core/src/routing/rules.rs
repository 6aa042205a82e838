//! The fixed routing rules, highest priority first.

use std::fmt;

use crate::claim::rules::format_usd;
use crate::models::claim::{ClaimType, ExtractedFields, MandatoryField, Route, RouteDecision};

/// Claims with estimated damage strictly below this amount are fast-tracked.
pub const FAST_TRACK_THRESHOLD: u64 = 25_000;

/// Description keywords that send a claim to investigation, in match priority.
pub const SUSPICIOUS_KEYWORDS: [&str; 3] = ["fraud", "staged", "inconsistent"];

type RuleFn = fn(&ExtractedFields, &[MandatoryField]) -> Option<RouteDecision>;

/// A named routing predicate. Returns a decision when it matches.
#[derive(Clone, Copy)]
pub struct RoutingRule {
    pub name: &'static str,
    check: RuleFn,
}

impl RoutingRule {
    pub fn new(name: &'static str, check: RuleFn) -> Self {
        Self { name, check }
    }

    pub fn evaluate(
        &self,
        fields: &ExtractedFields,
        missing: &[MandatoryField],
    ) -> Option<RouteDecision> {
        (self.check)(fields, missing)
    }
}

impl fmt::Debug for RoutingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutingRule").field("name", &self.name).finish()
    }
}

/// Any missing mandatory field forces manual review.
pub fn missing_fields_rule() -> RoutingRule {
    RoutingRule::new("missing_fields", |_, missing| {
        if missing.is_empty() {
            return None;
        }
        let names: Vec<&str> = missing.iter().map(MandatoryField::as_str).collect();
        Some(RouteDecision::new(
            Route::ManualReview,
            format!("Missing mandatory fields: {}", names.join(", ")),
        ))
    })
}

/// A suspicious keyword in the description triggers investigation.
pub fn suspicious_keyword_rule() -> RoutingRule {
    RoutingRule::new("suspicious_keyword", |fields, _| {
        let description = fields.description.as_deref().unwrap_or("").to_lowercase();
        SUSPICIOUS_KEYWORDS
            .iter()
            .find(|keyword| description.contains(*keyword))
            .map(|keyword| {
                RouteDecision::new(
                    Route::Investigation,
                    format!("Description contains suspicious keyword: '{}'", keyword),
                )
            })
    })
}

pub fn injury_rule() -> RoutingRule {
    RoutingRule::new("injury", |fields, _| {
        (fields.claim_type == ClaimType::Injury)
            .then(|| RouteDecision::new(Route::SpecialistQueue, "Claim involves injury"))
    })
}

/// Low-value claims skip manual handling.
pub fn fast_track_rule() -> RoutingRule {
    RoutingRule::new("fast_track", |fields, _| {
        fields
            .estimated_damage
            .filter(|damage| *damage < FAST_TRACK_THRESHOLD)
            .map(|damage| {
                RouteDecision::new(
                    Route::FastTrack,
                    format!(
                        "Estimated damage ({}) is below {} threshold",
                        format_usd(damage),
                        format_usd(FAST_TRACK_THRESHOLD)
                    ),
                )
            })
    })
}

/// Always matches.
pub fn default_rule() -> RoutingRule {
    RoutingRule::new("default", |_, _| Some(no_criteria_decision()))
}

pub(super) fn no_criteria_decision() -> RouteDecision {
    RouteDecision::new(
        Route::ManualReview,
        "Does not meet Fast-track criteria and no other flags detected",
    )
}
