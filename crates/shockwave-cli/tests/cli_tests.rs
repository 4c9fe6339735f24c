//! End-to-end tests for the `shockwave` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// TEST HELPERS
// =============================================================================

/// A command isolated from the user's settings and environment.
fn shockwave(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shockwave").unwrap();
    cmd.env("SHOCKWAVE_CONFIG_DIR", config_dir)
        .env_remove("SHOCKWAVE_CATALOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes the bundled sample into `dir` and returns its path.
fn write_sample(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("holdings.csv");
    shockwave(dir.path())
        .args(["sample", "--quiet", "--output"])
        .arg(&path)
        .assert()
        .success();
    path
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_scenarios_list() {
    let dir = TempDir::new().unwrap();
    shockwave(dir.path())
        .args(["scenarios", "list", "--format", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("market-crash"))
        .stdout(predicate::str::contains("economic-boom"));
}

#[test]
fn test_scenarios_show_unknown() {
    let dir = TempDir::new().unwrap();
    shockwave(dir.path())
        .args(["scenarios", "show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_custom_catalog_replaces_builtin() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("catalog.json");
    fs::write(
        &catalog,
        r#"{"scenarios": [{"id": "housing-slump", "name": "Housing Slump",
            "impacts": [{"assetClass": "Real Estate", "percentageChange": -25}]}]}"#,
    )
    .unwrap();

    shockwave(dir.path())
        .args(["scenarios", "list", "--format", "minimal", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout("housing-slump\n");
}

// =============================================================================
// ANALYSIS
// =============================================================================

#[test]
fn test_analyze_json() {
    let dir = TempDir::new().unwrap();
    let holdings = write_sample(&dir);

    let json = json_output(
        shockwave(dir.path())
            .arg("analyze")
            .arg(&holdings)
            .args(["--scenario", "market-crash", "--format", "json"]),
    );

    assert_eq!(json["owner"], "holdings");
    assert_eq!(json["scenarioId"], "market-crash");
    let impact = &json["impact"];
    assert_eq!(impact["originalValue"].as_f64().unwrap(), 245e9);
    assert!((impact["absoluteChange"].as_f64().unwrap() + 80.8e9).abs() < 1.0);
    assert_eq!(impact["assetImpacts"].as_array().unwrap().len(), 11);
    assert_eq!(json["topRiskContributors"].as_array().unwrap().len(), 5);
}

#[test]
fn test_analyze_table() {
    let dir = TempDir::new().unwrap();
    let holdings = write_sample(&dir);

    shockwave(dir.path())
        .arg("analyze")
        .arg(&holdings)
        .args(["-s", "crypto-winter", "--top", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Asset Class Breakdown"))
        .stdout(predicate::str::contains("Bitcoin"));
}

#[test]
fn test_analyze_unknown_scenario() {
    let dir = TempDir::new().unwrap();
    let holdings = write_sample(&dir);

    shockwave(dir.path())
        .arg("analyze")
        .arg(&holdings)
        .args(["--scenario", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_analyze_uses_default_scenario() {
    let dir = TempDir::new().unwrap();
    let holdings = write_sample(&dir);

    shockwave(dir.path())
        .arg("analyze")
        .arg(&holdings)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No scenario selected"));

    shockwave(dir.path())
        .args(["config", "set", "default_scenario", "rate-hike"])
        .assert()
        .success();

    shockwave(dir.path())
        .arg("analyze")
        .arg(&holdings)
        .args(["--format", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Change: -"));
}

#[test]
fn test_missing_holdings_file() {
    let dir = TempDir::new().unwrap();
    shockwave(dir.path())
        .args(["analyze", "does-not-exist.csv", "--scenario", "market-crash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load holdings"));
}

#[test]
fn test_malformed_holdings_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "name,value\nTesla,10\n").unwrap();

    shockwave(dir.path())
        .arg("allocation")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required columns"));
}

// =============================================================================
// COMPARISON AND ALLOCATION
// =============================================================================

#[test]
fn test_compare() {
    let dir = TempDir::new().unwrap();
    let holdings = write_sample(&dir);

    shockwave(dir.path())
        .arg("compare")
        .arg(&holdings)
        .args(["--format", "minimal"])
        .assert()
        .success()
        .stdout("market-crash\n");

    let json = json_output(
        shockwave(dir.path())
            .arg("compare")
            .arg(&holdings)
            .args(["--format", "json"]),
    );
    assert_eq!(json["results"].as_array().unwrap().len(), 7);
    assert_eq!(json["summary"]["bestScenario"], "economic-boom");
}

#[test]
fn test_allocation_by_region_csv() {
    let dir = TempDir::new().unwrap();
    let holdings = write_sample(&dir);

    shockwave(dir.path())
        .arg("allocation")
        .arg(&holdings)
        .args(["--by", "region", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("bucket,count,value,weight\n"))
        .stdout(predicate::str::contains("North America,8,"));
}

// =============================================================================
// REPORTS AND SAMPLE
// =============================================================================

#[test]
fn test_report_to_stdout() {
    let dir = TempDir::new().unwrap();
    let holdings = write_sample(&dir);

    shockwave(dir.path())
        .arg("report")
        .arg(&holdings)
        .args(["--scenario", "market-crash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Scenario: Market Crash"));
}

#[test]
fn test_report_top_risk_follows_settings() {
    let dir = TempDir::new().unwrap();
    let holdings = write_sample(&dir);

    shockwave(dir.path())
        .arg("report")
        .arg(&holdings)
        .args(["--scenario", "market-crash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Top Risk Contributors"))
        .stdout(predicate::str::contains("| New Value |"));

    let json = json_output(
        shockwave(dir.path())
            .arg("report")
            .arg(&holdings)
            .args(["--scenario", "market-crash", "--format", "json"]),
    );
    assert_eq!(json["topRisk"].as_array().unwrap().len(), 5);

    shockwave(dir.path())
        .args(["config", "set", "top_assets", "2"])
        .assert()
        .success();
    let json = json_output(
        shockwave(dir.path())
            .arg("report")
            .arg(&holdings)
            .args(["--scenario", "market-crash", "--format", "json"]),
    );
    assert_eq!(json["topRisk"].as_array().unwrap().len(), 2);
}

#[test]
fn test_report_into_directory() {
    let dir = TempDir::new().unwrap();
    let holdings = write_sample(&dir);
    let out = dir.path().join("reports");
    fs::create_dir(&out).unwrap();

    shockwave(dir.path())
        .arg("report")
        .arg(&holdings)
        .args(["--scenario", "tech-bubble", "--text", "--quiet", "--dir"])
        .arg(&out)
        .assert()
        .success();

    let names: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("tech-bubble-impact-"));
    assert!(names[0].ends_with(".txt"));
}

#[test]
fn test_report_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let holdings = write_sample(&dir);
    let target = dir.path().join("report.md");
    fs::write(&target, "keep me").unwrap();

    shockwave(dir.path())
        .arg("report")
        .arg(&holdings)
        .args(["--scenario", "market-crash", "--output"])
        .arg(&target)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&target).unwrap(), "keep me");

    shockwave(dir.path())
        .arg("report")
        .arg(&holdings)
        .args(["--scenario", "market-crash", "--force", "--quiet", "--output"])
        .arg(&target)
        .assert()
        .success();
    assert!(fs::read_to_string(&target).unwrap().starts_with("# "));
}

#[test]
fn test_sample_to_stdout() {
    let dir = TempDir::new().unwrap();
    shockwave(dir.path())
        .arg("sample")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "name,value,assetClass,industry,region,ticker,currency\n",
        ));
}

// =============================================================================
// CONFIG
// =============================================================================

#[test]
fn test_config_roundtrip() {
    let dir = TempDir::new().unwrap();

    shockwave(dir.path())
        .args(["config", "get", "format", "--format", "minimal"])
        .assert()
        .success()
        .stdout("table\n");

    shockwave(dir.path())
        .args(["config", "set", "format", "json"])
        .assert()
        .success();
    assert!(dir.path().join("config.json").exists());

    // Stored format now applies to other commands
    let output = shockwave(dir.path())
        .args(["scenarios", "show", "rate-hike"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["id"], "rate-hike");

    shockwave(dir.path())
        .args(["config", "reset", "format"])
        .assert()
        .success();
    shockwave(dir.path())
        .args(["config", "get", "default_format", "--format", "minimal"])
        .assert()
        .success()
        .stdout("table\n");
}

#[test]
fn test_config_rejects_bad_values() {
    let dir = TempDir::new().unwrap();

    shockwave(dir.path())
        .args(["config", "set", "top_assets", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid count"));

    shockwave(dir.path())
        .args(["config", "set", "default_currency", "EUR"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn test_broken_settings_file_can_be_reset() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    shockwave(dir.path())
        .args(["scenarios", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));

    shockwave(dir.path())
        .args(["config", "reset", "--all"])
        .assert()
        .success();

    shockwave(dir.path())
        .args(["scenarios", "list"])
        .assert()
        .success();
}
