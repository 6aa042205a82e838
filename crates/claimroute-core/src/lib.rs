//! Core library for insurance claim transcript processing.
//!
//! This crate provides:
//! - Pattern-driven field extraction from noisy OCR transcripts
//! - Mandatory field checks
//! - Ordered rule-based routing with human-readable reasoning
//! - Claim report models for output writers

pub mod claim;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod routing;
pub mod transcript;

pub use claim::{ClaimParser, ExtractionResult, RuleBasedClaimParser};
pub use error::{ClaimError, ConfigError, Result};
pub use models::claim::{
    ClaimReport, ClaimType, ExtractedFields, MandatoryField, Route, RouteDecision,
    MANDATORY_FIELDS,
};
pub use models::config::ClaimrouteConfig;
pub use pipeline::{process_claim, process_pages, ClaimPipeline};
pub use routing::{decide, RouteDecisionEngine};
pub use transcript::join_pages;
