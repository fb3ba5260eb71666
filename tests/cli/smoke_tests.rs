// tests/cli/smoke_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::Workspace;

fn cloc_lines() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cloc_lines"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("valid JSON on stdout")
}

#[test]
fn shows_help() {
    cloc_lines().arg("--help").assert().success().stdout(predicate::str::contains("cloc_lines"));
}

#[test]
fn table_report_lists_languages_and_total() {
    let ws = Workspace::sample();
    cloc_lines()
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Language"))
        .stdout(predicate::str::contains("Python"))
        .stdout(predicate::str::contains("Rust"))
        .stdout(predicate::str::contains("TOTAL"));
}

#[test]
fn json_report_by_language() {
    let ws = Workspace::sample();
    let value = json_output(cloc_lines().args(["--format", "json", "--sort", "name"]).arg(ws.path()));

    let languages = value["languages"].as_array().expect("languages array");
    assert_eq!(languages.len(), 2);
    assert_eq!(languages[0]["language"], "Python");
    assert_eq!(value["total"]["code"], 6);
    assert_eq!(value["total"]["comments"], 5);
    assert_eq!(value["total"]["files"], 2);
}

#[test]
fn json_report_by_file_keeps_unreadable_entries() {
    let ws = Workspace::sample();
    let missing = ws.path().join("missing.go");
    let value = json_output(
        cloc_lines().args(["--format", "json", "--by-file", "--jobs", "2"]).arg(ws.path()).arg(&missing),
    );

    let files = value["files"].as_array().expect("files array");
    assert_eq!(files.len(), 3);
    assert!(files[0]["name"].as_str().is_some_and(|n| n.ends_with("util.py")));
    assert!(files[2]["name"].as_str().is_some_and(|n| n.ends_with("missing.go")));
    assert_eq!(files[2]["code"], 0);
    assert!(files[2]["complexity"].is_null());
}

#[test]
fn filters_narrow_the_walk() {
    let ws = Workspace::sample();
    let value = json_output(cloc_lines().args(["--format", "json", "--include-lang", "rust"]).arg(ws.path()));
    assert_eq!(value["languages"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["languages"][0]["language"], "Rust");

    let value = json_output(cloc_lines().args(["--format", "json", "--not-match-dir", "^src$"]).arg(ws.path()));
    assert_eq!(value["languages"][0]["language"], "Python");
}

#[test]
fn yaml_report() {
    let ws = Workspace::sample();
    cloc_lines()
        .args(["--format", "yaml"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("languages:"))
        .stdout(predicate::str::contains("total:"));
}

#[test]
fn xml_report_by_file() {
    let ws = Workspace::sample();
    cloc_lines()
        .args(["--format", "xml", "--by-file"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml"))
        .stdout(predicate::str::contains("<results><files>"))
        .stdout(predicate::str::contains(r#"language="Python""#))
        .stdout(predicate::str::contains(r#"<total sum_files="2" blank="1" comment="5" code="6""#));
}

#[test]
fn show_lang_lists_builtin_languages() {
    cloc_lines()
        .arg("--show-lang")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust"))
        .stdout(predicate::str::contains(".rs"))
        .stdout(predicate::str::contains("Makefile"));
}

#[test]
fn custom_definitions_are_applied() {
    let ws = Workspace::new();
    ws.write_file("app.fnl", "; comment\n(print 1)\n");
    let defs = ws.write_file(
        "langs.json",
        r#"{"languages": [{"id": "fennel", "display_name": "Fennel", "extensions": ["fnl"], "line_comments": [";"]}]}"#,
    );

    let value = json_output(
        cloc_lines().args(["--format", "json", "--by-file", "--definitions"]).arg(&defs).arg(ws.path().join("app.fnl")),
    );
    assert_eq!(value["files"][0]["language"], "Fennel");
    assert_eq!(value["files"][0]["comments"], 1);
    assert_eq!(value["files"][0]["code"], 1);
}

#[test]
fn debug_trace_goes_to_stderr() {
    let ws = Workspace::new();
    let file = ws.write_file("one.c", "/* c */\nint x;\n");
    cloc_lines()
        .args(["--debug", "--jobs", "1"])
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("[COMM,cd:0,cm:1,bk:0,iscm:false,iscms:false] /* c */"))
        .stderr(predicate::str::contains("[CODE,cd:1,cm:1,bk:0"));
}

#[test]
fn invalid_arguments_fail() {
    cloc_lines().args(["--match-dir", "["]).assert().failure().stderr(predicate::str::contains("--match-dir"));
    cloc_lines().args(["--jobs", "0"]).assert().failure();
    cloc_lines().args(["--sort", "size"]).assert().failure();
}
