//! Report generation tests for bmi-planner.
//!
//! These tests verify:
//! - Report files are written with the dated file name
//! - Report content follows the fixed layout
//! - Printing to stdout matches the written file

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bmi-planner"))
}

/// Find the single report written into `dir`
fn find_report(dir: &Path) -> PathBuf {
    let reports: Vec<PathBuf> = fs::read_dir(dir)
        .expect("Failed to read output dir")
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(reports.len(), 1, "expected exactly one file: {:?}", reports);
    reports.into_iter().next().unwrap()
}

#[test]
fn test_report_written_to_output_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output_dir = temp_dir.path().join("reports");

    cli()
        .args(["report", "--height", "170", "--weight", "70", "--age", "30"])
        .args(["--gender", "female", "--activity", "active"])
        .arg("--output-dir")
        .arg(&output_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("report saved"));

    let path = find_report(&output_dir);
    let name = path.file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("BMI_Report_"), "bad name {}", name);
    assert!(name.ends_with(".txt"));
    // BMI_Report_YYYY-MM-DD.txt
    assert_eq!(name.len(), "BMI_Report_".len() + 10 + ".txt".len());

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("\nBMI HEALTH REPORT\n================\n"));
    assert!(content.contains("- Gender: female\n"));
    assert!(content.contains("- Activity Level: active\n"));
    assert!(content.contains("- BMI Score: 24.2\n"));
    assert!(content.contains("- Category: Normal Weight\n"));
    assert!(content.contains("- Daily Calories: 2640\n"));
    assert!(content.contains("- Protein Intake: 80g\n"));
    assert!(content.contains("- Recommended Meals: 5 per day\n"));
    assert!(content.contains("Please consult with a healthcare professional"));
}

#[test]
fn test_report_file_uses_local_date_and_tie_rounding() {
    let temp_dir = tempfile::tempdir().unwrap();
    let before = chrono::Local::now().date_naive();

    cli()
        .args(["report", "--height", "200", "--weight", "81", "--age", "45"])
        .arg("--output-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("BMI 20.3 (Normal Weight)"));

    let after = chrono::Local::now().date_naive();
    let path = find_report(temp_dir.path());
    let name = path.file_name().unwrap().to_str().unwrap().to_string();
    let content = fs::read_to_string(&path).unwrap();

    assert!(content.contains("- BMI Score: 20.3\n"));
    let matches_day = |day: chrono::NaiveDate| {
        let date = day.format("%Y-%m-%d").to_string();
        name == format!("BMI_Report_{}.txt", date)
            && content.contains(&format!("\nGenerated on: {}\n", date))
    };
    assert!(matches_day(before) || matches_day(after), "{}", name);
}

#[test]
fn test_report_stdout_matches_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = ["--height", "185", "--weight", "92", "--age", "51"];

    cli()
        .arg("report")
        .args(args)
        .arg("--output-dir")
        .arg(temp_dir.path())
        .assert()
        .success();
    let written = fs::read_to_string(find_report(temp_dir.path())).unwrap();

    let output = cli().arg("report").args(args).arg("--stdout").output().unwrap();
    assert!(output.status.success());
    let printed = String::from_utf8(output.stdout).unwrap();

    assert_eq!(printed, written);
    assert!(printed.contains("- Category: Overweight\n"));
    assert!(printed.contains("- Activity Level: Not specified\n"));
}

#[test]
fn test_report_uses_configured_output_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output_dir = temp_dir.path().join("from-config");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!("[report]\noutput_dir = {:?}\n", output_dir.display().to_string()),
    )
    .unwrap();

    cli()
        .arg("--config")
        .arg(&config_path)
        .args(["report", "--height", "150", "--weight", "40", "--age", "19"])
        .assert()
        .success();

    let content = fs::read_to_string(find_report(&output_dir)).unwrap();
    assert!(content.contains("- Category: Underweight\n"));
    assert!(content.contains("1. Eat nutrient-dense, calorie-rich foods"));
}

#[test]
fn test_stdout_conflicts_with_output_dir() {
    cli()
        .args(["report", "--height", "170", "--weight", "70", "--age", "30"])
        .args(["--stdout", "--output-dir", "somewhere"])
        .assert()
        .failure();
}
