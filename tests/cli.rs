//! E2E tests for the compute, compare and batch commands

use std::process::Command;

/// Old regime, 6,00,000 taxable after the standard deduction
#[test]
fn compute_old_regime_text() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "compute",
            "--regime",
            "old",
            "--salary",
            "650000",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("old regime"));
    assert!(stdout.contains("32500.00"));
    assert!(stdout.contains("1300.00"));
    assert!(stdout.contains("33800.00"));
}

/// New regime at 10L is fully rebated
#[test]
fn compute_new_regime_json() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "compute",
            "--regime",
            "new",
            "--salary",
            "1075000",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("\"total_income\": \"1000000.00\""));
    assert!(stdout.contains("\"base_tax\": \"0.00\""));
    assert!(stdout.contains("\"rebate\": \"40000.00\""));
    assert!(stdout.contains("\"total_tax\": \"0.00\""));
}

/// Exemption utilisation is shown when capital gains are present
#[test]
fn compute_new_regime_shows_exemption_allocation() {
    let output = Command::new("cargo")
        .args(["run", "--", "compute", "--regime", "new", "--ltcg", "600000"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("BASIC EXEMPTION UTILISATION"));
    // 6L - 1.25L own exemption - 4L basic exemption = 75,000 at 12.5%
    assert!(stdout.contains("9375.00"));
}

/// Both regime columns appear in the comparison table
#[test]
fn compare_outputs_both_regimes() {
    let output = Command::new("cargo")
        .args(["run", "--", "compare", "--salary", "1500000"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Old Regime"));
    assert!(stdout.contains("New Regime"));
    assert!(stdout.contains("Total Tax"));
    assert!(stdout.contains("regime saves"));
}

/// Batch command reads scenarios and writes one CSV row per input
#[test]
fn batch_csv_scenarios() {
    let output = Command::new("cargo")
        .args(["run", "--", "batch", "tests/data/scenarios.csv"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("regime,total_income,base_tax"));
    // Row 1: old regime, 6,00,000
    assert!(stdout.contains("old,600000.00,32500.00"));
    // Row 2: rebated to zero, TDS refunded
    assert!(stdout.contains("-10000.00"));
    // Row 3: LTCG-only scenario
    assert!(stdout.contains("9375.00"));
}

/// Unknown regime tags are rejected, not defaulted
#[test]
fn compute_rejects_unknown_regime() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "compute",
            "--regime",
            "legacy",
            "--salary",
            "100000",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}
