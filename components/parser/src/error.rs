//! Parser error types and helpers

use core_types::{ErrorKind, JsError, SourcePosition};

/// Create a syntax error at a given position
pub fn syntax_error(message: impl Into<String>, position: Option<SourcePosition>) -> JsError {
    JsError {
        kind: ErrorKind::SyntaxError,
        message: message.into(),
        source_position: position,
    }
}

/// Create an invalid-source construction error
pub fn invalid_source(message: impl Into<String>) -> JsError {
    JsError {
        kind: ErrorKind::InvalidSource,
        message: message.into(),
        source_position: None,
    }
}

/// Create a syntax error for an unrecognized lexeme
pub fn unrecognized_token(text: &str, position: Option<SourcePosition>) -> JsError {
    syntax_error(format!("unrecognized token '{}'", text), position)
}
