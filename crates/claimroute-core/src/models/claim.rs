//! Claim data models and the report document handed to output writers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fields extracted from a claim transcript.
///
/// Every schema key is always present in the serialized form; values that
/// could not be extracted serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    /// Insurer or agency name.
    pub carrier: Option<String>,

    /// Policy number (alphanumeric with hyphens).
    pub policy_number: Option<String>,

    /// Policy period as `MM/DD/YYYY - MM/DD/YYYY`.
    pub policy_effective_dates: Option<String>,

    /// Date of loss (`MM/DD/YYYY`).
    pub incident_date: Option<String>,

    /// Time of loss (`H:MM AM/PM`).
    pub incident_time: Option<String>,

    /// Name of the insured.
    pub policyholder_name: Option<String>,

    /// Claimant or driver name.
    pub claimant_name: Option<String>,

    /// Claimant phone number.
    pub claimant_contact: Option<String>,

    /// Other parties involved. Never populated from OCR text.
    pub third_parties: Vec<String>,

    /// Location of loss.
    pub incident_location: Option<String>,

    /// Accident narrative, collapsed to a single line.
    pub description: Option<String>,

    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub vin: Option<String>,
    pub plate_number: Option<String>,

    /// Kind of insured asset.
    pub asset_type: Option<String>,

    /// Estimated damage in whole currency units.
    pub estimated_damage: Option<u64>,

    /// Initial estimate; mirrors `estimated_damage`.
    pub initial_estimate: Option<u64>,

    /// Damage description line.
    pub damage_description: Option<String>,

    /// Inferred claim category.
    pub claim_type: ClaimType,

    /// Attached documents. Placeholder, always empty.
    pub attachments: Vec<String>,
}

impl ExtractedFields {
    /// Check whether a mandatory field holds a usable value.
    ///
    /// Empty and whitespace-only strings count as absent.
    pub fn is_present(&self, field: MandatoryField) -> bool {
        fn has_text(value: &Option<String>) -> bool {
            value.as_deref().is_some_and(|s| !s.trim().is_empty())
        }

        match field {
            MandatoryField::PolicyNumber => has_text(&self.policy_number),
            MandatoryField::PolicyholderName => has_text(&self.policyholder_name),
            MandatoryField::IncidentDate => has_text(&self.incident_date),
            MandatoryField::IncidentLocation => has_text(&self.incident_location),
            MandatoryField::ClaimantName => has_text(&self.claimant_name),
            MandatoryField::AssetType => has_text(&self.asset_type),
            // A zero estimate is falsy and treated as missing.
            MandatoryField::InitialEstimate => self.initial_estimate.is_some_and(|v| v != 0),
        }
    }

    /// Collect every mandatory field that is absent, in check order.
    pub fn missing_fields(&self) -> Vec<MandatoryField> {
        MANDATORY_FIELDS
            .iter()
            .copied()
            .filter(|field| !self.is_present(*field))
            .collect()
    }
}

/// Claim category inferred from keywords in the transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    /// Bodily injury or medical treatment is mentioned.
    Injury,
    /// Theft of the insured asset.
    Theft,
    /// Anything else.
    #[default]
    PropertyDamage,
}

impl ClaimType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Injury => "injury",
            ClaimType::Theft => "theft",
            ClaimType::PropertyDamage => "property_damage",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field whose absence forces manual review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MandatoryField {
    PolicyNumber,
    PolicyholderName,
    IncidentDate,
    IncidentLocation,
    ClaimantName,
    AssetType,
    InitialEstimate,
}

/// Mandatory fields in the order they are checked and reported.
pub const MANDATORY_FIELDS: [MandatoryField; 7] = [
    MandatoryField::PolicyNumber,
    MandatoryField::PolicyholderName,
    MandatoryField::IncidentDate,
    MandatoryField::IncidentLocation,
    MandatoryField::ClaimantName,
    MandatoryField::AssetType,
    MandatoryField::InitialEstimate,
];

impl MandatoryField {
    /// Schema key name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            MandatoryField::PolicyNumber => "policyNumber",
            MandatoryField::PolicyholderName => "policyholderName",
            MandatoryField::IncidentDate => "incidentDate",
            MandatoryField::IncidentLocation => "incidentLocation",
            MandatoryField::ClaimantName => "claimantName",
            MandatoryField::AssetType => "assetType",
            MandatoryField::InitialEstimate => "initialEstimate",
        }
    }
}

impl fmt::Display for MandatoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processing route recommended for a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    #[serde(rename = "Manual Review")]
    ManualReview,
    #[serde(rename = "Investigation")]
    Investigation,
    #[serde(rename = "Specialist Queue")]
    SpecialistQueue,
    #[serde(rename = "Fast-track")]
    FastTrack,
}

impl Route {
    pub fn label(&self) -> &'static str {
        match self {
            Route::ManualReview => "Manual Review",
            Route::Investigation => "Investigation",
            Route::SpecialistQueue => "Specialist Queue",
            Route::FastTrack => "Fast-track",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A route together with the explanation of why it was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDecision {
    pub route: Route,
    pub reasoning: String,
}

impl RouteDecision {
    pub fn new(route: Route, reasoning: impl Into<String>) -> Self {
        Self {
            route,
            reasoning: reasoning.into(),
        }
    }
}

/// The complete result for one claim document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimReport {
    pub extracted_fields: ExtractedFields,
    pub missing_fields: Vec<MandatoryField>,
    pub recommended_route: Route,
    pub reasoning: String,
}

impl ClaimReport {
    pub fn new(
        extracted_fields: ExtractedFields,
        missing_fields: Vec<MandatoryField>,
        decision: RouteDecision,
    ) -> Self {
        Self {
            extracted_fields,
            missing_fields,
            recommended_route: decision.route,
            reasoning: decision.reasoning,
        }
    }

    /// Serialize the report as a JSON document.
    pub fn to_json(&self, pretty: bool) -> crate::Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Parse a report previously written by [`ClaimReport::to_json`].
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_fields_serialize_every_key() {
        let json = serde_json::to_value(ExtractedFields::default()).unwrap();
        let obj = json.as_object().unwrap();

        let keys = [
            "carrier",
            "policyNumber",
            "policyEffectiveDates",
            "incidentDate",
            "incidentTime",
            "policyholderName",
            "claimantName",
            "claimantContact",
            "thirdParties",
            "incidentLocation",
            "description",
            "make",
            "model",
            "year",
            "vin",
            "plateNumber",
            "assetType",
            "estimatedDamage",
            "initialEstimate",
            "damageDescription",
            "claimType",
            "attachments",
        ];
        assert_eq!(obj.len(), keys.len());
        for key in keys {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj["policyNumber"], serde_json::Value::Null);
        assert_eq!(obj["claimType"], "property_damage");
        assert_eq!(obj["thirdParties"], serde_json::json!([]));
    }

    #[test]
    fn test_missing_fields_order() {
        let fields = ExtractedFields {
            policy_number: Some("123".to_string()),
            asset_type: Some("Automobile".to_string()),
            ..Default::default()
        };

        assert_eq!(
            fields.missing_fields(),
            vec![
                MandatoryField::PolicyholderName,
                MandatoryField::IncidentDate,
                MandatoryField::IncidentLocation,
                MandatoryField::ClaimantName,
                MandatoryField::InitialEstimate,
            ]
        );
    }

    #[test]
    fn test_blank_and_zero_values_are_missing() {
        let fields = ExtractedFields {
            claimant_name: Some("   ".to_string()),
            initial_estimate: Some(0),
            ..Default::default()
        };

        assert!(!fields.is_present(MandatoryField::ClaimantName));
        assert!(!fields.is_present(MandatoryField::InitialEstimate));
    }

    #[test]
    fn test_route_labels() {
        assert_eq!(Route::FastTrack.to_string(), "Fast-track");
        assert_eq!(
            serde_json::to_string(&Route::SpecialistQueue).unwrap(),
            "\"Specialist Queue\""
        );
        assert_eq!(
            serde_json::from_str::<Route>("\"Manual Review\"").unwrap(),
            Route::ManualReview
        );
    }

    #[test]
    fn test_mandatory_field_keys() {
        assert_eq!(
            serde_json::to_string(&MandatoryField::PolicyholderName).unwrap(),
            "\"policyholderName\""
        );
        assert_eq!(MandatoryField::InitialEstimate.to_string(), "initialEstimate");
    }

    #[test]
    fn test_report_keys() {
        let report = ClaimReport::new(
            ExtractedFields::default(),
            vec![MandatoryField::PolicyNumber],
            RouteDecision::new(Route::ManualReview, "Missing mandatory fields: policyNumber"),
        );
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["recommendedRoute"], "Manual Review");
        assert_eq!(json["missingFields"], serde_json::json!(["policyNumber"]));
        assert_eq!(json["reasoning"], "Missing mandatory fields: policyNumber");
        assert!(json["extractedFields"].is_object());

        let text = report.to_json(false).unwrap();
        assert_eq!(ClaimReport::from_json(&text).unwrap(), report);
    }
}
