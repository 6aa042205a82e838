use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PAGE_ONE: &str = "\
AUTOMOBILE LOSS NOTICE
POLICY NUMBER: 123-ABC-456
NAME OF INSURED: John Doe
CLAIMANT: John Doe
DATE OF LOSS: 01/15/2025
LOCATION OF LOSS: 123 Main St, Springfield
";

const PAGE_TWO: &str = "\
MAKE: Toyota
MODEL: Camry
ESTIMATED AMOUNT: $5,000
";

/// Command with an isolated config directory.
fn claimroute(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("claimroute").unwrap();
    cmd.env("XDG_CONFIG_HOME", home).env("HOME", home);
    cmd
}

fn write_pages(dir: &TempDir) -> (String, String) {
    let one = dir.path().join("page1.txt");
    let two = dir.path().join("page2.txt");
    fs::write(&one, PAGE_ONE).unwrap();
    fs::write(&two, PAGE_TWO).unwrap();
    (one.display().to_string(), two.display().to_string())
}

#[test]
fn process_multi_page_claim_to_json() {
    let dir = TempDir::new().unwrap();
    let (one, two) = write_pages(&dir);

    let output = claimroute(dir.path())
        .args(["process", &one, &two, "--compact"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["recommendedRoute"], "Fast-track");
    assert_eq!(report["missingFields"], serde_json::json!([]));
    assert_eq!(report["extractedFields"]["policyNumber"], "123-ABC-456");
    assert_eq!(report["extractedFields"]["estimatedDamage"], 5000);
    assert_eq!(
        report["reasoning"],
        "Estimated damage ($5,000) is below $25,000 threshold"
    );
}

#[test]
fn process_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let (one, _) = write_pages(&dir);
    let out = dir.path().join("report.json");

    claimroute(dir.path())
        .args(["process", &one, "-o", &out.display().to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manual Review"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(
        report["missingFields"],
        serde_json::json!(["initialEstimate"])
    );
    assert_eq!(report["reasoning"], "Missing mandatory fields: initialEstimate");
}

#[test]
fn process_reads_stdin() {
    let dir = TempDir::new().unwrap();

    claimroute(dir.path())
        .args(["process", "-", "--format", "text"])
        .write_stdin("DESCRIPTION OF ACCIDENT: nothing\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Route: Manual Review"))
        .stdout(predicate::str::contains("Missing fields: policyNumber"));
}

#[test]
fn process_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    claimroute(dir.path())
        .args(["process", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transcript file not found"));
}

#[test]
fn batch_writes_reports_and_summary() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("claims");
    let out = dir.path().join("out");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("good.txt"), format!("{}{}", PAGE_ONE, PAGE_TWO)).unwrap();
    fs::write(
        input.join("shady.txt"),
        format!(
            "{}{}DESCRIPTION OF ACCIDENT: story seems staged\n",
            PAGE_ONE, PAGE_TWO
        ),
    )
    .unwrap();
    fs::write(input.join("ignored.md"), PAGE_ONE).unwrap();

    claimroute(dir.path())
        .args([
            "batch",
            &format!("{}/*", input.display()),
            "-o",
            &out.display().to_string(),
            "--summary",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2 claims"));

    let good: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("good.json")).unwrap()).unwrap();
    assert_eq!(good["recommendedRoute"], "Fast-track");

    let shady: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("shady.json")).unwrap()).unwrap();
    assert_eq!(shady["recommendedRoute"], "Investigation");

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.starts_with("filename,status,policy_number,route"));
    assert!(summary.contains("good.txt,success,123-ABC-456,Fast-track"));
    assert!(summary.contains("shady.txt,success,123-ABC-456,Investigation"));
}

#[test]
fn batch_keeps_reports_with_shared_stem() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in");
    let out = dir.path().join("out");
    fs::create_dir_all(input.join("a")).unwrap();
    fs::create_dir_all(input.join("b")).unwrap();
    fs::write(input.join("a").join("claim.txt"), format!("{}{}", PAGE_ONE, PAGE_TWO)).unwrap();
    fs::write(input.join("b").join("claim.txt"), PAGE_ONE).unwrap();

    claimroute(dir.path())
        .args([
            "batch",
            &format!("{}/*/*.txt", input.display()),
            "-o",
            &out.display().to_string(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2 claims"));

    let mut names: Vec<_> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["claim-2.json", "claim.json"]);

    let first: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("claim.json")).unwrap()).unwrap();
    assert_eq!(first["recommendedRoute"], "Fast-track");

    let second: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("claim-2.json")).unwrap()).unwrap();
    assert_eq!(second["recommendedRoute"], "Manual Review");
}

#[test]
fn config_set_and_get() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json").display().to_string();

    claimroute(dir.path())
        .args(["--config", &config, "config", "init"])
        .assert()
        .success();

    claimroute(dir.path())
        .args(["--config", &config, "config", "set", "output.format", "text"])
        .assert()
        .success();

    claimroute(dir.path())
        .args(["--config", &config, "config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\""));
}
