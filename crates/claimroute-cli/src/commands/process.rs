//! Process command - extract and route a single claim from its page transcripts.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use claimroute_core::models::config::ClaimrouteConfig;
use claimroute_core::transcript::{join_pages, join_pages_plain};
use claimroute_core::{ClaimPipeline, ClaimReport};

use super::config::load_config;
use super::report::{format_report, OutputFormat};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// OCR transcript files, one per page, in page order ("-" reads stdin)
    #[arg(required = true)]
    pages: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Join pages without "--- PAGE n ---" markers
    #[arg(long)]
    no_page_markers: bool,

    /// Write compact JSON
    #[arg(long)]
    compact: bool,

    /// List missing mandatory fields on stderr
    #[arg(long)]
    show_missing: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let pages = args
        .pages
        .iter()
        .map(|path| read_transcript(path))
        .collect::<anyhow::Result<Vec<String>>>()?;

    info!("Processing claim from {} page transcript(s)", pages.len());

    let text = assemble_text(&pages, &config, args.no_page_markers);
    let report = ClaimPipeline::new().process(&text);

    if args.show_missing && !report.missing_fields.is_empty() {
        eprintln!("{}", style("Missing mandatory fields:").yellow());
        for field in &report.missing_fields {
            eprintln!("  - {}", field);
        }
    }

    let format = args
        .format
        .unwrap_or_else(|| OutputFormat::from(config.output.format));
    let pretty = config.output.pretty && !args.compact;
    let output = format_report(&report, format, pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} {} - output written to {}",
            style("✓").green(),
            route_label(&report),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read one page transcript from a file or, for "-", from stdin.
pub fn read_transcript(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| anyhow::anyhow!("Failed to read transcript from stdin: {}", e))?;
        return Ok(text);
    }

    if !path.exists() {
        anyhow::bail!("Transcript file not found: {}", path.display());
    }

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read transcript {}: {}", path.display(), e))
}

/// Join page transcripts according to configuration.
pub fn assemble_text(pages: &[String], config: &ClaimrouteConfig, no_markers: bool) -> String {
    if config.transcript.page_markers && !no_markers {
        join_pages(pages)
    } else {
        join_pages_plain(pages)
    }
}

fn route_label(report: &ClaimReport) -> String {
    style(report.recommended_route.label()).bold().to_string()
}
