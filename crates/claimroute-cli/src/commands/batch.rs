//! Batch processing command for many claim transcripts.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tracing::{debug, error, warn};

use claimroute_core::{ClaimPipeline, ClaimReport, Route};

use super::config::load_config;
use super::process::{assemble_text, read_transcript};
use super::report::{format_report, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Transcript files or glob pattern; each file is one claim
    #[arg(required = true)]
    input: String,

    /// Output directory for per-claim reports
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each report (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single transcript.
struct ProcessResult {
    path: PathBuf,
    report: Option<ClaimReport>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let continue_on_error = args.continue_on_error || config.batch.continue_on_error;

    let files = expand_input(&args.input, &config.batch.extension)?;
    if files.is_empty() {
        anyhow::bail!("No matching transcripts found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} transcripts to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} claims")?
            .progress_chars("=>-"),
    );

    // Each claim is independent, so transcripts are processed concurrently.
    let pipeline = Arc::new(ClaimPipeline::new());
    let config = Arc::new(config);
    let semaphore = Arc::new(Semaphore::new(args.jobs.max(1)));
    let mut handles = Vec::with_capacity(files.len());

    for path in files {
        let permit = semaphore.clone().acquire_owned().await?;
        let pipeline = Arc::clone(&pipeline);
        let config = Arc::clone(&config);
        let progress = progress.clone();

        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let file_start = Instant::now();
            let result = read_transcript(&path)
                .map(|text| pipeline.process(&assemble_text(&[text], &config, false)));
            progress.inc(1);
            (path, result, file_start.elapsed().as_millis() as u64)
        }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let (path, result, processing_time_ms) = handle.await?;

        match result {
            Ok(report) => {
                debug!("{} -> {}", path.display(), report.recommended_route);
                results.push(ProcessResult {
                    path,
                    report: Some(report),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        report: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }
    }

    progress.finish_with_message("Complete");

    let format = args
        .format
        .unwrap_or_else(|| OutputFormat::from(config.output.format));

    if let Some(output_dir) = &args.output_dir {
        let mut taken = HashSet::new();
        for result in &results {
            if let Some(report) = &result.report {
                let output_path = report_path(output_dir, &result.path, format, &mut taken);
                let content = format_report(report, format, config.output.pretty)?;
                fs::write(&output_path, content)?;
                debug!("Wrote report to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    print_overview(&results, start);

    Ok(())
}

/// Expand a glob pattern, keeping only transcripts with the given extension.
fn expand_input(pattern: &str, extension: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = glob(pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(extension))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Report path for one input, named after its stem.
///
/// Inputs sharing a stem get `-2`, `-3`, ... suffixes in processing order so
/// no report overwrites another.
fn report_path(
    output_dir: &Path,
    input: &Path,
    format: OutputFormat,
    taken: &mut HashSet<PathBuf>,
) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("claim");

    let mut path = output_dir.join(format!("{}.{}", stem, format.extension()));
    let mut n = 2;
    while taken.contains(&path) {
        path = output_dir.join(format!("{}-{}.{}", stem, n, format.extension()));
        n += 1;
    }

    if n > 2 {
        warn!(
            "Report name for {} already used, writing {}",
            input.display(),
            path.display()
        );
    }
    taken.insert(path.clone());
    path
}

/// Count successful claims per route, in a stable order.
fn route_counts(results: &[ProcessResult]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for report in results.iter().filter_map(|r| r.report.as_ref()) {
        *counts.entry(report.recommended_route.label()).or_insert(0) += 1;
    }
    counts
}

fn print_overview(results: &[ProcessResult], start: Instant) {
    let successful = results.iter().filter(|r| r.report.is_some()).count();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    println!();
    println!(
        "{} Processed {} claims in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful).green(),
        style(failed.len()).red()
    );

    for (route, count) in route_counts(results) {
        let label = if route == Route::FastTrack.label() {
            style(route).green()
        } else {
            style(route).yellow()
        };
        println!("   {}: {}", label, count);
    }

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "policy_number",
        "route",
        "missing_fields",
        "reasoning",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(report) = &result.report {
            let missing: Vec<&str> = report.missing_fields.iter().map(|f| f.as_str()).collect();
            wtr.write_record([
                filename,
                "success",
                report
                    .extracted_fields
                    .policy_number
                    .as_deref()
                    .unwrap_or(""),
                report.recommended_route.label(),
                &missing.join(";"),
                &report.reasoning,
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_input_filters_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "x").unwrap();
        fs::write(dir.path().join("a.TXT"), "x").unwrap();
        fs::write(dir.path().join("c.json"), "{}").unwrap();

        let pattern = format!("{}/*", dir.path().display());
        let files = expand_input(&pattern, "txt").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["a.TXT", "b.txt"]);
    }

    #[test]
    fn test_report_path() {
        let mut taken = HashSet::new();
        assert_eq!(
            report_path(
                Path::new("out"),
                Path::new("in/claim-7.txt"),
                OutputFormat::Json,
                &mut taken
            ),
            PathBuf::from("out/claim-7.json")
        );
    }

    #[test]
    fn test_report_path_disambiguates_shared_stems() {
        let mut taken = HashSet::new();
        let out = Path::new("out");

        let paths: Vec<_> = ["in/a/claim.txt", "in/b/claim.txt", "in/claim-2.txt", "in/c/claim.txt"]
            .iter()
            .map(|input| report_path(out, Path::new(input), OutputFormat::Json, &mut taken))
            .collect();

        assert_eq!(
            paths,
            vec![
                PathBuf::from("out/claim.json"),
                PathBuf::from("out/claim-2.json"),
                PathBuf::from("out/claim-2-2.json"),
                PathBuf::from("out/claim-3.json"),
            ]
        );
    }

    #[test]
    fn test_route_counts() {
        let report = claimroute_core::process_claim("");
        let results = vec![
            ProcessResult {
                path: PathBuf::from("a.txt"),
                report: Some(report.clone()),
                error: None,
                processing_time_ms: 1,
            },
            ProcessResult {
                path: PathBuf::from("b.txt"),
                report: Some(report),
                error: None,
                processing_time_ms: 1,
            },
            ProcessResult {
                path: PathBuf::from("c.txt"),
                report: None,
                error: Some("boom".into()),
                processing_time_ms: 1,
            },
        ];

        let counts = route_counts(&results);
        assert_eq!(counts.get("Manual Review"), Some(&2));
        assert_eq!(counts.len(), 1);
    }
}
