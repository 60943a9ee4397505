use std::io::Write;
use std::process::Command;

use nw_aligner::pairs::read_pairs;
use nw_aligner::{AlignerError, AlignerParameters, BatchAligner, ScoreParams};
use tempfile::NamedTempFile;

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_file_to_results() {
    let file = csv_file("AGCTG,AGCT\nACGT,ACGT\n,AA\nA,A\n");
    let pairs = read_pairs(file.path()).unwrap();
    assert_eq!(pairs.len(), 4);

    let params = AlignerParameters::new().with_score_params(ScoreParams::new(1, -1, -1));
    let batch = BatchAligner::new(2, params).unwrap();
    let lines: Vec<String> = batch
        .align_all(pairs)
        .unwrap()
        .iter()
        .map(|r| r.to_string())
        .collect();

    assert_eq!(
        lines,
        vec!["AGCTG AGCT- 3", "ACGT ACGT 4", "-- AA -2", "A A 1"]
    );
}

#[test]
fn test_missing_file() {
    let err = read_pairs("/nonexistent/dir/sequences.csv").unwrap_err();
    assert!(matches!(err, AlignerError::Io(_)));
}

#[test]
fn test_cli_prints_one_line_per_row() {
    let file = csv_file("AGCTG,AGCT\nACGT,ACGT\n");
    let output = Command::new(env!("CARGO_BIN_EXE_nw-align"))
        .arg(file.path())
        .args(["--gap", "-1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "AGCTG AGCT- 3\nACGT ACGT 4\n");
}

#[test]
fn test_cli_default_scoring() {
    let file = csv_file("AGCTG,AGCT\n");
    let output = Command::new(env!("CARGO_BIN_EXE_nw-align"))
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "AGCTG AGCT- 2\n");
}

#[test]
fn test_cli_reports_malformed_row() {
    let file = csv_file("ACGT,ACGT\nGATTACA\n");
    let output = Command::new(env!("CARGO_BIN_EXE_nw-align"))
        .arg(file.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("row 2"), "stderr: {}", stderr);
}

#[test]
fn test_cli_reads_config_file() {
    let pairs = csv_file("ACGT,ACGT\n");
    let mut config = NamedTempFile::new().unwrap();
    write!(config, "workers = 2\n[score]\nmatch = 3\n").unwrap();
    config.flush().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_nw-align"))
        .arg(pairs.path())
        .arg("--config")
        .arg(config.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "ACGT ACGT 12\n");
}

#[test]
fn test_cli_aligns_characters_not_bytes() {
    let file = csv_file("é,è\naé,ae\n日本語,日本\n");
    let output = Command::new(env!("CARGO_BIN_EXE_nw-align"))
        .arg(file.path())
        .args(["--gap", "-1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "é è -1\naé ae 0\n日本語 日本- 1\n"
    );
}

#[test]
fn test_cli_rejects_overflowing_gap() {
    let file = csv_file("AAA,\n");
    let gap = (i64::MIN / 2).to_string();
    let output = Command::new(env!("CARGO_BIN_EXE_nw-align"))
        .arg(file.path())
        .args(["--gap", gap.as_str(), "--workers", "2"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("overflow"), "stderr: {}", stderr);
}
