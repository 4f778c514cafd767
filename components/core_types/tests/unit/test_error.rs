//! Unit tests for front-end error types

use core_types::{ErrorKind, JsError, SourcePosition};

#[test]
fn test_error_without_position() {
    let error = JsError {
        kind: ErrorKind::InvalidSource,
        message: "source must not be empty".to_string(),
        source_position: None,
    };
    assert_eq!(error.to_string(), "InvalidSource: source must not be empty");
}

#[test]
fn test_error_with_position() {
    let error = JsError {
        kind: ErrorKind::SyntaxError,
        message: "unrecognized token 'abc'".to_string(),
        source_position: Some(SourcePosition {
            line: 1,
            column: 5,
            offset: 4,
        }),
    };
    let rendered = error.to_string();
    assert!(rendered.starts_with("SyntaxError:"));
    assert!(rendered.contains("line 1, column 5"));
}

#[test]
fn test_error_is_std_error() {
    let error = JsError {
        kind: ErrorKind::InternalError,
        message: "unexpected state".to_string(),
        source_position: None,
    };
    let boxed: Box<dyn std::error::Error> = Box::new(error);
    assert!(boxed.source().is_none());
}

#[test]
fn test_error_clone_preserves_kind() {
    let error = JsError {
        kind: ErrorKind::SyntaxError,
        message: "test".to_string(),
        source_position: None,
    };
    let cloned = error.clone();
    assert_eq!(error, cloned);
}
