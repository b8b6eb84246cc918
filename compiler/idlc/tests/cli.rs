//! Runs the `idlc` binary end to end.

use std::path::PathBuf;
use std::process::{Command, Output};

fn idlc(args: &[&str]) -> Output {
    match Command::new(env!("CARGO_BIN_EXE_idlc")).args(args).output() {
        Ok(output) => output,
        Err(err) => panic!("failed to spawn idlc: {err}"),
    }
}

fn fixture() -> String {
    concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../idl_parse/tests/fixtures/telemetry.idl"
    )
    .to_string()
}

/// Write `contents` to a file unique to this test process.
fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("idlc-{}-{name}", std::process::id()));
    if let Err(err) = std::fs::write(&path, contents) {
        panic!("failed to write {}: {err}", path.display());
    }
    path
}

#[test]
fn test_dumps_module_tree() {
    let output = idlc(&[&fixture()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Module: DdsData::Archive"));
    assert!(stdout.contains("LogServiceRequestData switch (DdsData::LogServiceRequestType)"));
    assert!(stdout.contains("AnalogTimeSeries = 0"));
}

#[test]
fn test_dumps_tokens() {
    let output = idlc(&["--tokens", &fixture()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Tokens ("));
    assert!(stdout.contains("Identifier(\"DdsData\")"));
}

#[test]
fn test_parse_error_exit_status() {
    let path = scratch_file("broken.idl", "module M {\n  long x;\n};\n");
    let path_str = path.to_string_lossy().into_owned();
    let output = idlc(&[&path_str]);
    let _ = std::fs::remove_file(&path);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with(&format!("{path_str}:2:3: error: unexpected keyword")));
}

#[test]
fn test_lex_error_exit_status() {
    let path = scratch_file("unterminated.idl", "const string s = \"abc");
    let path_str = path.to_string_lossy().into_owned();
    let output = idlc(&[&path_str]);
    let _ = std::fs::remove_file(&path);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: unterminated string literal"));
}

#[test]
fn test_missing_file_exit_status() {
    let output = idlc(&["/nonexistent/model.idl"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_usage_error_exit_status() {
    let output = idlc(&[]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: idlc"));
}
