use std::path::PathBuf;

use crate::{
    eval::prelude::Value,
    utils::prelude::{Error, Reporter}
};
use super::{run, run_file, Outcome};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("losos-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn test_run_outcomes() {
    let mut reporter = Reporter::null();

    assert_eq!(run("1 + 2 * 3", &mut reporter), Outcome::Value(Value::Number(7.0)));
    assert_eq!(run("1 + \"a\"", &mut reporter), Outcome::RuntimeFailure);
    assert!(reporter.had_runtime_error());
    assert!(!reporter.had_error());

    reporter.clear();

    assert_eq!(run("\"abc", &mut reporter), Outcome::SyntaxFailure);
    assert!(reporter.had_error());
    assert!(!reporter.had_runtime_error());
}

#[test]
fn test_scan_error_skips_evaluation() {
    let mut reporter = Reporter::null();

    // the expression parses once `@` is skipped, but a scan error still fails the run
    assert_eq!(run("1 @ + 2", &mut reporter), Outcome::SyntaxFailure);
    assert_eq!(reporter.error_count(), 1);
    assert_eq!(reporter.runtime_errors().count(), 0);
}

#[test]
fn test_string_outcome() {
    let mut reporter = Reporter::null();

    let outcome = run("\"ab\" + \"cd\"", &mut reporter);
    assert_eq!(outcome, Outcome::Value(Value::String("abcd".into())));
}

#[test]
fn test_run_file() {
    let path = temp_file("ok.lox", "// comment\n(6 / 2)\n");
    let mut reporter = Reporter::null();

    let value = run_file(&path, &mut reporter);
    let _ = std::fs::remove_file(&path);

    assert_eq!(value.map(|value| value.to_string()), Ok("3".to_string()));
}

#[test]
fn test_run_file_syntax_error() {
    let path = temp_file("syntax.lox", "(1 + 2");
    let mut reporter = Reporter::null();

    let result = run_file(&path, &mut reporter);
    let _ = std::fs::remove_file(&path);

    match result {
        Err(Error::Syntax { errors, src, .. }) => {
            assert_eq!(src, "(1 + 2");
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].message, "Expect ')' after expression.");
        },
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_run_file_runtime_error() {
    let path = temp_file("runtime.lox", "\n-\"a\"");
    let mut reporter = Reporter::null();

    let result = run_file(&path, &mut reporter);
    let _ = std::fs::remove_file(&path);

    match result {
        Err(Error::Runtime { error, .. }) => {
            assert_eq!(error.to_string(), "Operand must be a number.\n[line 2]");
        },
        other => panic!("expected runtime error, got {other:?}"),
    }
}

#[test]
fn test_run_file_missing() {
    let mut reporter = Reporter::null();
    let result = run_file(&PathBuf::from("/definitely/not/here.lox"), &mut reporter);

    assert_eq!(result, Err(Error::StdIo { err: std::io::ErrorKind::NotFound }));
}
