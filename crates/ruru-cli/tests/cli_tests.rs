// Rust guideline compliant 2026-10-16

//! End-to-end tests for the `ruru` binary.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn ruru(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ruru"))
        .current_dir(dir.path())
        .env_remove("RURU_SEVERAL_OK")
        .env_remove("RURU_OUTPUT_FORMAT")
        .env("NO_COLOR", "1")
        .args(args)
        .output()
        .expect("run ruru")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

const BATCH_XYZ_MESSAGE: &str = "Error in batch element 1 ('xyz'): The provided argument 'xyz' \
     is not valid. Available choices are: apple, banana, cherry.";

#[test]
fn match_resolves_unique_prefix() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = ruru(&temp_dir, &["match", "ban", "--choices", "apple,banana,cherry"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "banana");
}

#[test]
fn match_no_match_exits_with_two() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = ruru(&temp_dir, &["match", "orange", "--choices", "apple,banana,cherry"]);

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("'orange' is not valid"), "stderr: {}", err);
    assert!(err.contains("apple, banana, cherry"), "stderr: {}", err);
}

#[test]
fn match_ambiguous_without_several_ok_fails() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = ruru(&temp_dir, &["match", "ap", "--choices", "apple,apricot,banana"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("matches multiple choices: apple, apricot"));
}

#[test]
fn match_ambiguous_with_several_ok_lists_all() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = ruru(
        &temp_dir,
        &["match", "ap", "--choices", "apple,apricot,banana", "--several-ok"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines, vec!["apple", "apricot"]);
}

#[test]
fn match_batch_requires_several_ok() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = ruru(&temp_dir, &["match", "ban", "ch", "--choices", "apple,banana,cherry"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("several_ok"));
}

#[test]
fn match_batch_failure_names_element_in_json() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = ruru(
        &temp_dir,
        &[
            "match",
            "ban",
            "xyz",
            "--choices",
            "apple,banana,cherry",
            "--several-ok",
            "--json",
        ],
    );

    assert_eq!(output.status.code(), Some(2));
    let value: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("JSON error envelope");
    assert_eq!(value["code"], "no_match");
    assert_eq!(value["details"]["index"], 1);
    assert_eq!(value["details"]["element"], "xyz");
    assert_eq!(value["message"], BATCH_XYZ_MESSAGE);
}

#[test]
fn match_batch_failure_plain_message_is_printed_once() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = ruru(
        &temp_dir,
        &["match", "ban", "xyz", "--choices", "apple,banana,cherry", "--several-ok"],
    );

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), format!("error: {}\n", BATCH_XYZ_MESSAGE));
}

#[test]
fn match_json_success_envelope() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = ruru(
        &temp_dir,
        &["match", "ban", "--choices", "apple,banana", "--batch", "--several-ok", "--json"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("JSON");
    assert_eq!(value["status"], "ok");
    assert_eq!(value["result"], serde_json::json!(["banana"]));
}

#[test]
fn match_uses_configured_set() {
    let temp_dir = TempDir::new().expect("temp dir");
    fs::write(
        temp_dir.path().join("ruru.toml"),
        "[sets]\nthemes = [\"default\", \"dark\", \"light\", \"minimal\"]\n",
    )
    .expect("write config");

    let output = ruru(&temp_dir, &["match", "dar", "--set", "th"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "dark");
}

#[test]
fn config_several_ok_and_format_apply() {
    let temp_dir = TempDir::new().expect("temp dir");
    fs::write(
        temp_dir.path().join("ruru.toml"),
        "several_ok = true\noutput_format = \"json\"\n",
    )
    .expect("write config");

    let output = ruru(&temp_dir, &["match", "ap", "--choices", "apple,apricot"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("JSON");
    assert_eq!(value["result"], serde_json::json!(["apple", "apricot"]));
}

#[test]
fn invalid_config_exits_with_one() {
    let temp_dir = TempDir::new().expect("temp dir");
    fs::write(temp_dir.path().join("ruru.toml"), "[sets]\nthemes = []\n").expect("write config");

    let output = ruru(&temp_dir, &["sets"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to load configuration"));
}

#[test]
fn pmatch_reports_raw_outcomes() {
    let temp_dir = TempDir::new().expect("temp dir");

    let output = ruru(&temp_dir, &["pmatch", "med", "--choices", "mean,median,mode"]);
    assert_eq!(stdout(&output).trim(), "unique 1 median");

    let output = ruru(&temp_dir, &["pmatch", "m", "--choices", "mean,median,mode"]);
    assert_eq!(stdout(&output).trim(), "ambiguous");

    let output = ruru(&temp_dir, &["pmatch", "x", "--choices", "mean,median,mode"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "no match");
}

#[test]
fn sets_lists_configuration() {
    let temp_dir = TempDir::new().expect("temp dir");
    fs::write(
        temp_dir.path().join("ruru.toml"),
        "[sets]\nalerts = [\"info\", \"error\"]\n",
    )
    .expect("write config");

    let output = ruru(&temp_dir, &["sets"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "alerts: info, error");
}

#[test]
fn explicit_missing_config_file_fails() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = ruru(&temp_dir, &["--config", "nope.toml", "sets"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("error: failed to load config file nope.toml: IO error: "), "stderr: {}", err);
    assert_eq!(err.matches("IO error").count(), 1, "stderr: {}", err);
}

#[test]
fn unknown_log_level_exits_with_one() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = ruru(
        &temp_dir,
        &["--log-level", "verbose", "match", "ban", "--choices", "apple,banana"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("'verbose' is not valid"), "stderr: {}", err);
    assert!(err.contains("error, warn, info, debug, trace"), "stderr: {}", err);
}

#[test]
fn unknown_log_level_json_exits_with_one() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = ruru(
        &temp_dir,
        &["--log-level", "verbose", "--json", "pmatch", "m", "--choices", "mean"],
    );

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("JSON");
    assert_eq!(value["code"], "no_match");
}

#[test]
fn pmatch_ignores_broken_config() {
    let temp_dir = TempDir::new().expect("temp dir");
    fs::write(temp_dir.path().join("ruru.toml"), "[sets]\nthemes = []\n").expect("write config");

    let output = ruru(&temp_dir, &["pmatch", "med", "--choices", "mean,median,mode"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "unique 1 median");

    let output = ruru(&temp_dir, &["--config", "nope.toml", "pmatch", "m", "--choices", "mean"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "unique 0 mean");
}
