// End-to-end tests for the mustfacts binary

use std::fs;
use std::process::Command;

fn mustfacts() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mustfacts"))
}

#[test]
fn test_writes_facts_next_to_input() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("prog.txt");
    fs::write(&input, "print [1];\n").expect("Failed to write input");

    let status = mustfacts().arg(&input).status().expect("Failed to run binary");
    assert!(status.success());

    let output = fs::read_to_string(dir.path().join("prog.facts.P")).expect("Missing facts file");
    assert_eq!(
        output,
        "'Print'('1','2').\n'Array'('2','3').\n'Elem'('3','4','5').\n'Int'('4','1').\n'Empty'('5').\n"
    );
}

#[test]
fn test_stdout_with_bare_relations() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("prog.txt");
    fs::write(&input, "x = 1;").expect("Failed to write input");

    let out = mustfacts()
        .arg(&input)
        .arg("--stdout")
        .arg("--bare-relations")
        .output()
        .expect("Failed to run binary");
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "Assign('1','2','3').\nVar('2','x').\nInt('3','1').\n"
    );
}

#[test]
fn test_parse_error_reported_without_output() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("bad.txt");
    let output = dir.path().join("bad.facts.P");
    fs::write(&input, "if (x").expect("Failed to write input");

    let out = mustfacts()
        .arg(&input)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run binary");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Parsing Error"));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out = mustfacts()
        .arg(dir.path().join("nope.txt"))
        .output()
        .expect("Failed to run binary");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("failed to read"));
}
