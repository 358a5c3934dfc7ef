use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn convert_fixture_to_stdout() {
    let mut cmd = cargo_bin_cmd!("csv-to-features");
    cmd.arg(fixture_path("features.csv"));

    let output_pred = predicate::str::starts_with("<?php")
        .and(predicate::str::contains("$features_total_count = 7;"))
        .and(predicate::str::contains("\"heading\" => \"KI-Funktionen\""));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn convert_fixture_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("features.php");

    let mut cmd = cargo_bin_cmd!("csv-to-features");
    cmd.arg(fixture_path("features.csv")).arg(&output);
    cmd.assert().success().stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("<?php"));
    assert!(written.contains("\"cell_class\" => \"$cell_standard_vs_premium"));
}

#[test]
fn format_flag_selects_json() {
    let mut cmd = cargo_bin_cmd!("csv-to-features");
    cmd.arg(fixture_path("features.csv")).arg("--format").arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"features_total_count\": 7"));
}

#[test]
fn config_file_is_layered() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("features.toml");
    fs::write(&config, "[output]\nformat = \"yaml\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("csv-to-features");
    cmd.arg(fixture_path("features.csv")).arg("--config").arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("features_total_count: 7"));
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("csv-to-features");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("php")
            .and(predicate::str::contains("json"))
            .and(predicate::str::contains("yaml")),
    );
}

#[test]
fn missing_input_prints_usage() {
    let mut cmd = cargo_bin_cmd!("csv-to-features");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::starts_with("Usage: csv-to-features"));
}

#[test]
fn missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("csv-to-features");
    cmd.arg("does-not-exist.csv");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Error: File does not exist: does-not-exist.csv"));
}

#[test]
fn wrong_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("features.txt");
    fs::copy(fixture_path("features.csv"), &input).unwrap();

    let mut cmd = cargo_bin_cmd!("csv-to-features");
    cmd.arg(&input);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Error: File must be a CSV file"));
}

#[test]
fn data_before_heading_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("orphan.csv");
    fs::write(
        &input,
        "type,Feature,Tooltip,Standard,Premium,Deluxe,Enterprise\n,Vorlagen,,TRUE,TRUE,TRUE,TRUE\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("csv-to-features");
    cmd.arg(&input);

    cmd.assert().code(1).stderr(predicate::str::contains(
        "Error: Malformed row 1: data row appears before any heading row",
    ));
}

#[test]
fn unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing-dir").join("features.php");

    let mut cmd = cargo_bin_cmd!("csv-to-features");
    cmd.arg(fixture_path("features.csv")).arg(&output);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Error writing to output file"));
    assert!(!output.exists());
}
