//! Integration tests for the markup-to-element CLI.
//!
//! These tests verify selection handling, output targets and failure behavior.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_markup-to-element"))
}

#[test]
fn test_basic_stdin() {
    cli()
        .write_stdin("<div></div>")
        .assert()
        .success()
        .stdout("React.createElement(\"div\")\n");
}

#[test]
fn test_dash_reads_stdin() {
    cli()
        .arg("-")
        .write_stdin("<p>Hi</p>\n")
        .assert()
        .success()
        .stdout("React.createElement(\"p\", {},\n  \"Hi\"\n)\n");
}

#[test]
fn test_pragma_and_indent() {
    cli()
        .args(["--pragma", "h", "--indent", "4"])
        .write_stdin("<p>Hi</p>")
        .assert()
        .success()
        .stdout("h(\"p\", {},\n    \"Hi\"\n)\n");
}

#[test]
fn test_indent_out_of_range_rejected() {
    cli()
        .args(["--indent", "18446744073709551615"])
        .write_stdin("<p>Hi</p>")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn test_file_input_and_output() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.html");
    let output_path = temp_dir.path().join("output.js");
    fs::write(&input_path, "<span class=\"x\"></span>\n").unwrap();

    cli()
        .arg(&input_path)
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout("");

    let output = fs::read_to_string(&output_path).unwrap();
    assert_eq!(output, "React.createElement(\"span\", {\n  className: \"x\"\n})\n");
}

#[test]
fn test_in_place_line_selection() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("view.js");
    fs::write(&path, "const a = 1;\n<b>x</b>\nexport default a;\n").unwrap();

    cli()
        .arg(&path)
        .args(["--lines", "2:2", "--in-place"])
        .assert()
        .success();

    let output = fs::read_to_string(&path).unwrap();
    assert_eq!(
        output,
        "const a = 1;\nReact.createElement(\"b\", {},\n  \"x\"\n)\nexport default a;\n"
    );
}

#[test]
fn test_empty_input_fails_without_output() {
    cli()
        .write_stdin("  \n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("no markup to convert"));
}

#[test]
fn test_failure_leaves_file_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("page.html");
    let original = "<p>keep</p>\n   \n<p>me</p>\n";
    fs::write(&path, original).unwrap();

    cli()
        .arg(&path)
        .args(["--lines", "2", "-i"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("conversion failed"));

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_line_range_beyond_document() {
    cli()
        .args(["--lines", "5:6"])
        .write_stdin("<p>a</p>\n<p>b</p>\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("beyond the end of the document"));
}

#[test]
fn test_reversed_line_range_rejected() {
    cli()
        .args(["--lines", "3:1"])
        .write_stdin("<p>a</p>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ends before it starts"));
}

#[test]
fn test_in_place_requires_file() {
    cli()
        .arg("--in-place")
        .write_stdin("<p>a</p>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--in-place needs an input file"));
}

#[test]
fn test_missing_file() {
    cli()
        .arg("/nonexistent/input.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading /nonexistent/input.html"));
}
