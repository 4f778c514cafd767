//! Unit tests for source position types

use core_types::SourcePosition;

#[test]
fn test_source_position_fields() {
    let pos = SourcePosition {
        line: 3,
        column: 14,
        offset: 42,
    };
    assert_eq!(pos.line, 3);
    assert_eq!(pos.column, 14);
    assert_eq!(pos.offset, 42);
}

#[test]
fn test_source_position_equality() {
    let a = SourcePosition {
        line: 1,
        column: 1,
        offset: 0,
    };
    let b = a.clone();
    assert_eq!(a, b);
}

#[test]
fn test_source_position_inequality() {
    let a = SourcePosition {
        line: 1,
        column: 1,
        offset: 0,
    };
    let b = SourcePosition {
        line: 1,
        column: 2,
        offset: 1,
    };
    assert_ne!(a, b);
}
