//! Full Pipeline Integration Tests
//!
//! Tests the complete flow: Source -> Tokenizer -> Lexer -> Parser -> AST.
//! This is the most critical integration test suite.

use core_types::ErrorKind;
use parser::{NodeKind, Parser};

/// Helper function to parse source and return the tree
fn parse_js(source: &str) -> Result<parser::AstNode, String> {
    parser::parse(source).map_err(|e| format!("Parse error: {}", e))
}

/// Test: canonical declaration parses to a single statement
#[test]
fn test_full_pipeline_declaration() {
    let tree = parse_js("let a = 1;").expect("Parse failed");

    assert_eq!(tree.kind, NodeKind::SourceFile);
    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].kind, NodeKind::VariableDeclaration);
}

/// Test: statements appear as children in source order
#[test]
fn test_full_pipeline_statement_order() {
    let tree = parse_js("let = 1; let = 2; let = 3;").expect("Parse failed");

    assert_eq!(tree.children.len(), 3);
    for child in &tree.children {
        assert_eq!(child.kind, NodeKind::VariableDeclaration);
        assert!(child.children.is_empty());
    }
}

/// Test: all-delimiter input terminates immediately with an empty root
#[test]
fn test_full_pipeline_all_delimiters() {
    let tree = parse_js(" ; \t\n ;").expect("Parse failed");

    assert_eq!(tree.kind, NodeKind::SourceFile);
    assert!(tree.children.is_empty());
}

/// Test: empty input fails construction, never producing a tree
#[test]
fn test_full_pipeline_empty_source() {
    let err = parser::parse("").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidSource);
}

/// Test: parsing is idempotent over the same immutable source
#[test]
fn test_full_pipeline_idempotent() {
    let source = "let = 1;\nlet = 2;";
    let first = parse_js(source).expect("Parse failed");
    let second = parse_js(source).expect("Parse failed");

    assert_eq!(first, second);
}

/// Test: the lenient scan stops at the first unrecognized lexeme
#[test]
fn test_full_pipeline_partial_tree_on_unknown() {
    let tree = parse_js("let a = 1; let b = 2;").expect("Parse failed");

    assert_eq!(tree.children.len(), 1);
}

/// Test: strict parsing names the offending lexeme and its position
#[test]
fn test_full_pipeline_strict_syntax_error() {
    let mut parser = Parser::new("let\nbad = 1;").unwrap();
    let err = parser.parse_strict().unwrap_err();

    assert_eq!(err.kind, ErrorKind::SyntaxError);
    assert!(err.message.contains("'bad'"));

    let position = err.source_position.expect("position missing");
    assert_eq!(position.line, 2);
    assert_eq!(position.column, 1);
}

/// Test: tree dump traversal is pre-order, parent before children
#[test]
fn test_full_pipeline_tree_dump_order() {
    let tree = parse_js("let = 1; let = 2;").expect("Parse failed");
    let rendered = tree.render_tree();

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines,
        ["SourceFile", "  VariableDeclaration", "  VariableDeclaration"]
    );
}
