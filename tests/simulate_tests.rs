use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn simulate_prints_report_for_default_parameters() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("capacity");
    cmd.args(["simulate", "-n", "500", "-s", "42"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Capacity Simulation Report"))
        .stdout(predicate::str::contains("Iterations: 500"))
        .stdout(predicate::str::contains("Seed: 42"))
        .stdout(predicate::str::contains("Analyst | 15.00 | 2640.00"))
        .stdout(predicate::str::contains("Adjuster | 3.00 | 528.00"))
        .stdout(predicate::str::contains("Registration | 3.00 | 528.00"));
}

#[test]
fn seeded_runs_print_identical_reports() {
    let run_once = || {
        let output = assert_cmd::cargo_bin_cmd!("capacity")
            .args(["simulate", "-n", "800", "-s", "7", "-f", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let mut value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        value["generated_at"] = serde_json::Value::Null;
        value
    };

    assert_eq!(run_once(), run_once());
}

#[test]
fn simulate_uses_config_file_and_writes_outputs() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = temp.child("capacity.yaml");
    config
        .write_str(
            "demand:\n  mean: 7500\n  std_dev: 0\nhours_per_fte: 176\nanalyst:\n  fte: 5\n  time_mean: 0.30\n  time_std_dev: 0\niterations: 3\n",
        )
        .unwrap();
    let report = temp.child("report.yaml");
    let csv = temp.child("samples.csv");
    let plots = temp.child("plots");

    let mut cmd = assert_cmd::cargo_bin_cmd!("capacity");
    cmd.args([
        "simulate",
        "-c",
        config.path().to_str().unwrap(),
        "-o",
        report.path().to_str().unwrap(),
        "--csv",
        csv.path().to_str().unwrap(),
        "--plots",
        plots.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Analyst | 5.00 | 880.00 | 100.00%"))
        .stdout(predicate::str::contains("Simulation report written to"))
        .stdout(predicate::str::contains("Sample table written to"))
        .stdout(predicate::str::contains("Histograms written to"));

    let report_yaml = std::fs::read_to_string(report.path()).unwrap();
    assert!(report_yaml.contains("iterations: 3"));
    assert!(report_yaml.contains("pool: analyst"));
    assert!(report_yaml.contains("saturation_probability: 1.0"));

    let samples = std::fs::read_to_string(csv.path()).unwrap();
    let lines: Vec<&str> = samples.lines().collect();
    assert_eq!(lines[0], "Demand,Analyst Hours,Adjuster Hours,Registration Hours");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("7500.0,2250.0,"));

    plots.child("demand.png").assert(predicate::path::exists());
    plots.child("analyst_hours.png").assert(predicate::path::exists());
}

#[test]
fn overrides_take_precedence_over_defaults() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("capacity");
    cmd.args([
        "simulate",
        "-n",
        "1",
        "--std-demand",
        "0",
        "--analyst-time-std",
        "0",
        "--analyst-fte",
        "20",
        "-f",
        "yaml",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("capacity_hours: 3520.0"))
        .stdout(predicate::str::contains("mean_required_hours: 2250.0"));
}

#[test]
fn degenerate_capacity_is_reported_not_rejected() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("capacity");
    cmd.args(["simulate", "-n", "10", "--hours-per-fte", "0", "-s", "1"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("inf"))
        .stderr(predicate::str::contains("hours_per_fte is not positive"));
}

#[test]
fn missing_config_file_fails() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("capacity");
    cmd.args(["simulate", "-c", "no-such-config.yaml"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn init_config_writes_default_yaml() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("default.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("capacity");
    cmd.args(["init-config", "-o", output.path().to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Default configuration written to"));

    output.assert(predicate::str::contains("hours_per_fte: 176.0"));
    output.assert(predicate::str::contains("iterations: 2000"));
}
