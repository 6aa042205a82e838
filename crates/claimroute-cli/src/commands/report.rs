//! Report rendering shared by the process and batch commands.

use claimroute_core::claim::rules::format_usd;
use claimroute_core::models::config::ReportFormat;
use claimroute_core::ClaimReport;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON report
    Json,
    /// CSV row with one column per field
    Csv,
    /// Plain text summary
    Text,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Csv => OutputFormat::Csv,
            ReportFormat::Text => OutputFormat::Text,
        }
    }
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn format_report(
    report: &ClaimReport,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(report.to_json(pretty)?),
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

fn format_csv(report: &ClaimReport) -> anyhow::Result<String> {
    let fields = serde_json::to_value(&report.extracted_fields)?;
    let fields = fields
        .as_object()
        .ok_or_else(|| anyhow::anyhow!("extracted fields did not serialize to an object"))?;

    let mut header = vec![
        "recommendedRoute".to_string(),
        "reasoning".to_string(),
        "missingFields".to_string(),
    ];
    let missing: Vec<&str> = report.missing_fields.iter().map(|f| f.as_str()).collect();
    let mut row = vec![
        report.recommended_route.to_string(),
        report.reasoning.clone(),
        missing.join(";"),
    ];

    for (key, value) in fields {
        header.push(key.clone());
        row.push(csv_cell(value));
    }

    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(&header)?;
    wtr.write_record(&row)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn csv_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(csv_cell)
            .collect::<Vec<_>>()
            .join(";"),
        other => other.to_string(),
    }
}

fn format_text(report: &ClaimReport) -> String {
    let fields = &report.extracted_fields;
    let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    let mut output = String::new();

    output.push_str(&format!("Route: {}\n", report.recommended_route));
    output.push_str(&format!("Reason: {}\n", report.reasoning));
    if report.missing_fields.is_empty() {
        output.push_str("Missing fields: none\n");
    } else {
        let missing: Vec<&str> = report.missing_fields.iter().map(|f| f.as_str()).collect();
        output.push_str(&format!("Missing fields: {}\n", missing.join(", ")));
    }
    output.push('\n');

    output.push_str("Policy:\n");
    output.push_str(&format!("  Number:  {}\n", show(&fields.policy_number)));
    output.push_str(&format!("  Carrier: {}\n", show(&fields.carrier)));
    output.push_str(&format!("  Period:  {}\n", show(&fields.policy_effective_dates)));
    output.push_str(&format!("  Insured: {}\n", show(&fields.policyholder_name)));
    output.push('\n');

    output.push_str("Incident:\n");
    output.push_str(&format!(
        "  When:     {} {}\n",
        show(&fields.incident_date),
        fields.incident_time.as_deref().unwrap_or("")
    ));
    output.push_str(&format!("  Where:    {}\n", show(&fields.incident_location)));
    output.push_str(&format!("  Claimant: {}\n", show(&fields.claimant_name)));
    output.push_str(&format!("  Contact:  {}\n", show(&fields.claimant_contact)));
    output.push_str(&format!("  Type:     {}\n", fields.claim_type));
    if let Some(description) = &fields.description {
        output.push_str(&format!("  Details:  {}\n", description));
    }
    output.push('\n');

    output.push_str("Asset:\n");
    output.push_str(&format!("  Type:    {}\n", show(&fields.asset_type)));
    output.push_str(&format!(
        "  Vehicle: {} {} {}\n",
        show(&fields.year),
        show(&fields.make),
        show(&fields.model)
    ));
    output.push_str(&format!("  VIN:     {}\n", show(&fields.vin)));
    output.push_str(&format!("  Plate:   {}\n", show(&fields.plate_number)));
    output.push('\n');

    output.push_str("Damage:\n");
    output.push_str(&format!(
        "  Estimate: {}\n",
        fields
            .estimated_damage
            .map(format_usd)
            .unwrap_or_else(|| "-".to_string())
    ));
    if let Some(damage) = &fields.damage_description {
        output.push_str(&format!("  Details:  {}\n", damage));
    }

    output
}
