// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const BIN: &str = env!("CARGO_BIN_EXE_tweet-analytics-process-rpc");

fn tweet(lang: &str, tags: &[&str]) -> String {
    let tags: Vec<String> = tags
        .iter()
        .map(|t| format!(r#"{{"text":"{}"}}"#, t))
        .collect();
    format!(
        r#"{{"doc":{{"text":"","entities":{{"hashtags":[{}]}},"lang":"{}"}}}},"#,
        tags.join(","),
        lang
    )
}

fn corpus() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"total_rows":5,"offset":0,"rows":["#).unwrap();
    writeln!(file, "{}", tweet("en", &["Go"])).unwrap();
    writeln!(file, "{}", tweet("en", &[])).unwrap();
    writeln!(file, "{}", tweet("fr", &["go", "rust"])).unwrap();
    writeln!(file, "{{\"doc\": nope").unwrap();
    writeln!(file, "{}", tweet("xx", &["Rust", "GO"])).unwrap();
    writeln!(file, "]}}").unwrap();
    file
}

fn languages() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"languages": {{"en": "English", "fr": "French"}}}}"#
    )
    .unwrap();
    file
}

fn analyze(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to launch analyzer")
}

fn expected_report() -> &'static str {
    "\nTop 10 most commonly used hashtags:\n\
     1. #go, 3\n\
     2. #rust, 2\n\
     \nTop 10 most commonly used languages:\n\
     1. English (en), 2\n\
     2. French (fr), 1\n\
     3. Undefined (xx), 1\n"
}

#[test]
fn test_report_is_identical_for_one_and_many_processes() {
    let data = corpus();
    let config = languages();
    let data_path = data.path().to_str().unwrap();
    let config_path = config.path().to_str().unwrap();

    for workers in ["1", "2", "3"] {
        let output = analyze(&["-d", data_path, "-c", config_path, "-n", workers]);
        assert!(
            output.status.success(),
            "{} workers failed: {}",
            workers,
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(
            stdout.starts_with(expected_report()),
            "unexpected report with {} workers:\n{}",
            workers,
            stdout
        );
        assert!(stdout.contains("Total processing time is : "));
    }
}

#[test]
fn test_text_strategy_runs_across_processes() {
    let mut data = NamedTempFile::new().unwrap();
    writeln!(data, "header").unwrap();
    writeln!(
        data,
        r##"{{"doc":{{"text":"#Rust #rust","entities":{{"hashtags":[]}},"lang":"en"}}}},"##
    )
    .unwrap();
    writeln!(
        data,
        r##"{{"doc":{{"text":"#tokio","entities":{{"hashtags":[]}},"lang":"en"}}}},"##
    )
    .unwrap();
    let config = languages();

    let output = analyze(&[
        "-d",
        data.path().to_str().unwrap(),
        "-c",
        config.path().to_str().unwrap(),
        "-n",
        "2",
        "-s",
        "text",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("1. #rust, 2\n2. #tokio, 1\n"));
    assert!(stdout.contains("1. English (en), 2\n"));
}

#[test]
fn test_missing_language_config_fails_before_scanning() {
    let data = corpus();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("languages.json");

    let output = analyze(&[
        "-d",
        data.path().to_str().unwrap(),
        "-c",
        missing.to_str().unwrap(),
        "-n",
        "2",
    ]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}

#[test]
fn test_missing_corpus_fails() {
    let config = languages();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("tweets.json");

    let output = analyze(&[
        "-d",
        missing.to_str().unwrap(),
        "-c",
        config.path().to_str().unwrap(),
        "-n",
        "3",
    ]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unknown_strategy_is_rejected_by_cli() {
    let output = analyze(&["-d", "tweets.json", "-c", "langs.json", "-s", "regex"]);
    assert!(!output.status.success());
}
