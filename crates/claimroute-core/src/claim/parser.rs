//! Rule-based claim parser mapping OCR transcripts onto the claim schema.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::claim::{ExtractedFields, MandatoryField};

use super::rules::{
    asset_type_classifier, claim_type_classifier, normalize_description,
    patterns::*,
    AmountExtractor, FieldExtractor, KeywordClassifier, Probe, ProbeChain,
};
use crate::models::claim::ClaimType;

/// Result of claim extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted claim fields.
    pub fields: ExtractedFields,
    /// Mandatory fields that could not be populated, in check order.
    pub missing: Vec<MandatoryField>,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for claim parsing.
pub trait ClaimParser {
    /// Parse claim fields from transcript text. Never fails.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Pattern-driven claim parser.
///
/// Holds only immutable probe tables, so one parser can be shared across
/// threads and reused for any number of documents.
pub struct RuleBasedClaimParser {
    carrier: ProbeChain,
    policy_number: Probe,
    effective_date: Probe,
    expiration_date: Probe,
    incident_date: Probe,
    incident_time: ProbeChain,
    policyholder_name: Probe,
    claimant_name: ProbeChain,
    claimant_contact: Probe,
    incident_location: Probe,
    description: Probe,
    make: Probe,
    model: Probe,
    year: Probe,
    vin: Probe,
    plate_number: Probe,
    damage_description: Probe,
    estimated_damage: AmountExtractor,
    claim_type: KeywordClassifier<ClaimType>,
    asset_type: KeywordClassifier<&'static str>,
}

impl RuleBasedClaimParser {
    /// Create a parser with the standard claim form probes.
    pub fn new() -> Self {
        Self {
            carrier: ProbeChain::new([&*CARRIER, &*AGENCY]),
            policy_number: Probe::new(&POLICY_NUMBER),
            effective_date: Probe::new(&EFFECTIVE_DATE),
            expiration_date: Probe::new(&EXPIRATION_DATE),
            incident_date: Probe::new(&DATE_OF_LOSS),
            incident_time: ProbeChain::new([&*TIME_OF_LOSS, &*LOOSE_TIME]),
            policyholder_name: Probe::new(&NAME_OF_INSURED),
            claimant_name: ProbeChain::new([&*CLAIMANT, &*DRIVER_NAME]),
            claimant_contact: Probe::new(&PRIMARY_PHONE),
            incident_location: Probe::new(&LOCATION_OF_LOSS),
            description: Probe::new(&DESCRIPTION_OF_ACCIDENT),
            make: Probe::new(&MAKE),
            model: Probe::new(&MODEL),
            year: Probe::new(&YEAR),
            vin: Probe::new(&VIN),
            plate_number: Probe::new(&PLATE_NUMBER),
            damage_description: Probe::new(&DESCRIBE_DAMAGE),
            estimated_damage: AmountExtractor::new(),
            claim_type: claim_type_classifier(),
            asset_type: asset_type_classifier(),
        }
    }

    fn extract_carrier(&self, text: &str, fields: &mut ExtractedFields) {
        fields.carrier = self.carrier.extract(text);
    }

    fn extract_policy_number(&self, text: &str, fields: &mut ExtractedFields) {
        fields.policy_number = self.policy_number.extract(text);
    }

    fn extract_dates(&self, text: &str, fields: &mut ExtractedFields) {
        // Both bounds or nothing
        fields.policy_effective_dates = match (
            self.effective_date.extract(text),
            self.expiration_date.extract(text),
        ) {
            (Some(eff), Some(exp)) => Some(format!("{} - {}", eff, exp)),
            _ => None,
        };

        fields.incident_date = self.incident_date.extract(text);
        fields.incident_time = self.incident_time.extract(text);
    }

    fn extract_people(&self, text: &str, fields: &mut ExtractedFields) {
        fields.policyholder_name = self.policyholder_name.extract(text);
        fields.claimant_name = self.claimant_name.extract(text);
        fields.claimant_contact = self.claimant_contact.extract(text);
        // No reliable way to pull party lists out of free OCR text.
        fields.third_parties = Vec::new();
    }

    fn extract_location(&self, text: &str, fields: &mut ExtractedFields) {
        fields.incident_location = self.incident_location.extract(text);
    }

    fn extract_description(&self, text: &str, fields: &mut ExtractedFields) {
        fields.description = self
            .description
            .extract(text)
            .map(|raw| normalize_description(&raw))
            .filter(|d| !d.is_empty());
    }

    fn extract_vehicle_info(&self, text: &str, fields: &mut ExtractedFields) {
        fields.make = self.make.extract(text);
        fields.model = self.model.extract(text);
        fields.year = self.year.extract(text);
        fields.vin = self.vin.extract(text);
        fields.plate_number = self.plate_number.extract(text);
        fields.asset_type = self.asset_type.extract(text).map(str::to_string);
    }

    fn extract_monetary(&self, text: &str, fields: &mut ExtractedFields) {
        fields.estimated_damage = self.estimated_damage.extract(text);
        fields.initial_estimate = fields.estimated_damage;
        fields.damage_description = self.damage_description.extract(text);
    }

    fn extract_claim_type(&self, text: &str, fields: &mut ExtractedFields) {
        fields.claim_type = self.claim_type.extract(text).unwrap_or_default();
    }
}

impl Default for RuleBasedClaimParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimParser for RuleBasedClaimParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing claim from {} characters of text", text.len());

        let mut fields = ExtractedFields::default();
        self.extract_carrier(text, &mut fields);
        self.extract_policy_number(text, &mut fields);
        self.extract_dates(text, &mut fields);
        self.extract_people(text, &mut fields);
        self.extract_location(text, &mut fields);
        self.extract_description(text, &mut fields);
        self.extract_vehicle_info(text, &mut fields);
        self.extract_monetary(text, &mut fields);
        self.extract_claim_type(text, &mut fields);
        fields.attachments = Vec::new();

        // Runs once, against the fully populated record.
        let missing = fields.missing_fields();
        let warnings: Vec<String> = missing
            .iter()
            .map(|field| format!("Could not extract {}", field))
            .collect();

        for warning in &warnings {
            debug!("{}", warning);
        }
        debug!(
            "Extracted claim {} ({} missing, type {})",
            fields.policy_number.as_deref().unwrap_or("<unknown>"),
            missing.len(),
            fields.claim_type
        );

        ExtractionResult {
            fields,
            missing,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
