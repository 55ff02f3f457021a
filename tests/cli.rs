use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("barkit").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("barkit"));
}

#[test]
fn render_writes_an_svg_file() {
    let dir = tempfile::tempdir().unwrap();
    let data_path = dir.path().join("data.json");
    let out_path = dir.path().join("chart.svg");
    fs::write(
        &data_path,
        r#"{"labels": ["A", "B", "C"], "datasets": [{"data": [10, 20, 15]}]}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("barkit").unwrap();
    cmd.args([
        "render",
        "--data",
        data_path.to_str().unwrap(),
        "--out",
        out_path.to_str().unwrap(),
        "--width",
        "600",
        "--height",
        "300",
        "--show-values",
    ]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Wrote chart to"));

    let svg = fs::read_to_string(&out_path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("</svg>"));
}

#[test]
fn render_rejects_mismatched_data() {
    let dir = tempfile::tempdir().unwrap();
    let data_path = dir.path().join("data.json");
    let out_path = dir.path().join("chart.svg");
    fs::write(
        &data_path,
        r#"{"labels": ["A", "B"], "datasets": [{"data": [10]}]}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("barkit").unwrap();
    cmd.args([
        "render",
        "--data",
        data_path.to_str().unwrap(),
        "--out",
        out_path.to_str().unwrap(),
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("labels"));
}
