//! End-to-end CLI tests
//!
//! Drives the Runtime the way the nanojs binary does.

use js_cli::{CliError, Runtime};
use parser::NodeKind;

#[test]
fn test_e2e_runtime_default_flow() {
    let mut runtime = Runtime::new();
    let tree = runtime.execute_string("let a = 1;").unwrap();

    assert_eq!(tree.kind, NodeKind::SourceFile);
    assert_eq!(tree.children.len(), 1);
}

#[test]
fn test_e2e_runtime_strict_flow() {
    let mut runtime = Runtime::new().with_strict(true);

    // A fully recognizable stream parses in strict mode
    let tree = runtime.execute_string("let = 1 + 2;").unwrap();
    assert_eq!(tree.children.len(), 1);

    // An identifier is not part of the recognized grammar yet
    let err = runtime.execute_string("let total = 1;").unwrap_err();
    assert!(matches!(err, CliError::Js(_)));
}

#[test]
fn test_e2e_runtime_error_display() {
    let mut runtime = Runtime::new();
    let err = runtime.execute_string("").unwrap_err();

    let rendered = err.to_string();
    assert!(rendered.contains("JavaScript error"));
    assert!(rendered.contains("InvalidSource"));
}
