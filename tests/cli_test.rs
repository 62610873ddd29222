//! End-to-end runs of the binaries against pages on disk.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn workspace_with_page(contents: &[u8]) -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    let cache = dir.path().join("fandom-cache");
    fs::create_dir(&cache).expect("create cache dir");
    fs::write(cache.join("luke-skywalker.html"), contents).expect("write page");
    dir
}

fn run_peek(dir: &TempDir) -> Output {
    Command::new(env!("CARGO_BIN_EXE_marker-peek"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("run marker-peek")
}

fn run_stdin(input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_locate_stdin"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn locate_stdin");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(input)
        .expect("write stdin");
    child.wait_with_output().expect("wait locate_stdin")
}

#[test]
fn prints_position_and_context() {
    let dir = workspace_with_page(br#"xxxxid="Appearances"yyyy"#);

    let output = run_peek(&dir);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Position: 4\nContext:\nxxxxid=\"Appearances\"yyyy\n"
    );
}

#[test]
fn prints_not_found_line() {
    let dir = workspace_with_page(b"<h2 id=\"Sources\">Sources</h2>");

    let output = run_peek(&dir);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Appearances not found\n");
}

#[test]
fn reports_only_first_occurrence() {
    let dir = workspace_with_page(br#"ab id="Appearances" cd id="Appearances""#);

    let output = run_peek(&dir);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Position: 3\n"));
    assert_eq!(stdout.matches("Position:").count(), 1);
}

#[test]
fn output_is_identical_across_runs() {
    let page = format!("{}<h2 id=\"Appearances\"></h2>{}", "é".repeat(400), "z".repeat(4000));
    let dir = workspace_with_page(page.as_bytes());

    let first = run_peek(&dir);
    let second = run_peek(&dir);

    assert_eq!(first.stdout, second.stdout);
    assert!(String::from_utf8_lossy(&first.stdout).starts_with("Position: 404\n"));
}

#[test]
fn missing_page_exits_nonzero() {
    let dir = TempDir::new().expect("tempdir");

    let output = run_peek(&dir);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("luke-skywalker.html"));
}

#[test]
fn undecodable_page_exits_nonzero() {
    let dir = workspace_with_page(b"<p>\xFF\xFE</p>");

    let output = run_peek(&dir);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to decode"));
}

#[test]
fn latin1_page_exits_nonzero() {
    let dir = workspace_with_page(b"<meta charset=\"ISO-8859-1\">M\xFCnchen id=\"Appearances\"");

    let output = run_peek(&dir);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid byte sequence at byte 28"));
    assert!(stderr.contains("windows-1252"));
}

#[test]
fn crlf_page_prints_normalized_context() {
    let dir = workspace_with_page(b"a\r\nid=\"Appearances\"\r\nb");

    let output = run_peek(&dir);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Position: 2\nContext:\na\nid=\"Appearances\"\nb\n"
    );
}

#[test]
fn stdin_lookup_prints_json() {
    let output = run_stdin(br#"xxxxid="Appearances"yyyy"#);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["marker"], "id=\"Appearances\"");
    assert_eq!(json["excerpt"]["position"], 4);
    assert_eq!(json["excerpt"]["start"], 0);
    assert_eq!(json["excerpt"]["end"], 24);
    assert_eq!(json["excerpt"]["context"], "xxxxid=\"Appearances\"yyyy");
}

#[test]
fn stdin_lookup_reports_null_when_absent() {
    let output = run_stdin(b"<html></html>");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert!(json["excerpt"].is_null());
}
