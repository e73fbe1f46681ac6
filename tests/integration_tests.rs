use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Verilog"))
        .stdout(predicate::str::contains("--no-completions"))
        .stdout(predicate::str::contains("--debounce-ms"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hdlpad"));
}

#[test]
fn test_cli_with_directory_argument() {
    cargo_bin_cmd!()
        .arg(fixture_path(""))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_cli_rejects_invalid_cache_size() {
    cargo_bin_cmd!()
        .args(["--cache-size", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--cache-size"));
}

#[test]
fn test_cli_rejects_unknown_flag() {
    cargo_bin_cmd!()
        .arg("--vhdl")
        .assert()
        .failure();
}

#[test]
fn test_fixture_counter_content() {
    let content = fs::read_to_string(fixture_path("counter.v")).unwrap();
    assert!(content.starts_with("module counter"));
    assert!(content.contains("always @(posedge clk"));
    assert!(content.trim_end().ends_with("endmodule"));
}
